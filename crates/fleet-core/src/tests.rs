//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RouteId, VehicleId};

    #[test]
    fn index_cast() {
        assert_eq!(VehicleId(42).index(), 42);
        assert_eq!(RouteId(7).index(), 7);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(RouteId(100) > RouteId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(RouteId::INVALID.0, u32::MAX);
        assert_eq!(VehicleId::default(), VehicleId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(12.9716, 77.5946);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn symmetry() {
        let a = GeoPoint::new(12.97, 77.59);
        let b = GeoPoint::new(13.10, 77.70);
        let ab = a.distance_km(b);
        let ba = b.distance_km(a);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn poles_and_antimeridian_are_finite() {
        let north = GeoPoint::new(90.0, 0.0);
        let south = GeoPoint::new(-90.0, 0.0);
        let d = north.distance_km(south);
        assert!(d.is_finite() && d > 0.0);

        let west = GeoPoint::new(0.0, 179.9);
        let east = GeoPoint::new(0.0, -179.9);
        let d = west.distance_km(east);
        assert!(d.is_finite());
        // The short way around, not half the globe.
        assert!(d < 100.0, "got {d}");
    }
}

#[cfg(test)]
mod time {
    use crate::{Tick, Timestamp};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(1_000);
        assert_eq!(t.offset_secs(5), Timestamp(1_005));
        assert_eq!(Timestamp(1_005).since(t), 5);
        assert_eq!(t.since(Timestamp(1_005)), -5);
    }

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick::ZERO.0, 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
        assert_eq!(Timestamp(9).to_string(), "@9");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::SimConfig;

    #[test]
    fn defaults_match_modelled_system() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.progress_step, 0.005);
        assert_eq!(cfg.tick_period_secs, 5);
        assert_eq!(cfg.history_capacity, 20);
    }

    #[test]
    fn tick_period_duration() {
        let cfg = SimConfig { tick_period_secs: 2, ..SimConfig::default() };
        assert_eq!(cfg.tick_period(), Duration::from_secs(2));
    }
}

#[cfg(test)]
mod error {
    use crate::{CoreError, VehicleId};

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            CoreError::VehicleNotFound(VehicleId(3)).to_string(),
            "vehicle VehicleId(3) not found"
        );
        assert_eq!(
            CoreError::Config("bad step".into()).to_string(),
            "configuration error: bad step"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{VehicleId, VehicleRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = VehicleRng::new(12345, VehicleId(0));
        let mut r2 = VehicleRng::new(12345, VehicleId(0));
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..=1.0);
            let b: f64 = r2.gen_range(0.0..=1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn adjacent_vehicles_diverge() {
        let mut r0 = VehicleRng::new(1, VehicleId(0));
        let mut r1 = VehicleRng::new(1, VehicleId(1));
        let a: f64 = r0.gen_range(0.0..=1.0);
        let b: f64 = r1.gen_range(0.0..=1.0);
        assert_ne!(a, b, "seeds for adjacent vehicles should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = VehicleRng::new(0, VehicleId(3));
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(0.0..=1.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = VehicleRng::new(0, VehicleId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
