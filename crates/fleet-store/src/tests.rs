//! Unit tests for fleet-store.

use std::io::Cursor;

use fleet_core::{GeoPoint, Timestamp, VehicleId};
use fleet_motion::{Direction, MotionState, PositionHistory, VehicleUpdate};
use fleet_route::Waypoint;

use crate::{
    load_routes_reader, load_vehicles_reader, MemoryRouteStore, MemoryVehicleStore,
    RouteDefinition, RouteStore, VehicleStore,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn two_stop_route(name: &str) -> RouteDefinition {
    RouteDefinition {
        name: name.to_string(),
        waypoints: vec![
            Waypoint::new("a", 0.0, 0.0, 0),
            Waypoint::new("b", 0.0, 1.0, 1),
        ],
    }
}

#[cfg(test)]
mod memory_route_store {
    use super::*;

    #[test]
    fn lookup_hit_and_miss() {
        let mut store = MemoryRouteStore::new();
        store.insert(two_stop_route("airport"));

        let found = store.route_by_name("airport").unwrap();
        assert_eq!(found.unwrap().waypoints.len(), 2);

        let missing = store.route_by_name("nowhere").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn insert_replaces() {
        let mut store = MemoryRouteStore::new();
        store.insert(two_stop_route("airport"));
        let mut updated = two_stop_route("airport");
        updated.waypoints.push(Waypoint::new("c", 0.0, 2.0, 2));
        store.insert(updated);

        assert_eq!(store.len(), 1);
        let found = store.route_by_name("airport").unwrap().unwrap();
        assert_eq!(found.waypoints.len(), 3);
    }
}

#[cfg(test)]
mod memory_vehicle_store {
    use super::*;

    #[test]
    fn list_in_ascending_id_order() {
        let mut store = MemoryVehicleStore::new();
        store.add_vehicle(VehicleId(5), "airport");
        store.add_vehicle(VehicleId(1), "airport");
        store.add_vehicle(VehicleId(3), "ring");

        let listed = store.list_vehicles().unwrap();
        let ids: Vec<u32> = listed.iter().map(|r| r.vehicle.0).collect();
        assert_eq!(ids, [1, 3, 5]);
        assert!(listed.iter().all(|r| r.motion.is_none()));
    }

    #[test]
    fn save_update_persists_snapshot() {
        let mut store = MemoryVehicleStore::new();
        store.add_vehicle(VehicleId(1), "airport");

        let update = VehicleUpdate {
            vehicle: VehicleId(1),
            state: MotionState {
                progress: 0.25,
                direction: Direction::Forward,
                position: GeoPoint::new(0.0, 0.25),
                last_updated: Timestamp(50),
            },
            history: PositionHistory::default(),
        };
        store.save_update(&update).unwrap();

        let record = store.record(VehicleId(1)).unwrap();
        assert_eq!(record.motion.as_ref().unwrap().progress, 0.25);
        assert!(record.history.is_some());
    }

    #[test]
    fn save_update_for_unknown_vehicle_is_noop() {
        let mut store = MemoryVehicleStore::new();
        let update = VehicleUpdate {
            vehicle: VehicleId(9),
            state: MotionState {
                progress: 0.0,
                direction: Direction::Forward,
                position: GeoPoint::new(0.0, 0.0),
                last_updated: Timestamp(0),
            },
            history: PositionHistory::default(),
        };
        store.save_update(&update).unwrap();
        assert!(store.is_empty());
    }
}

#[cfg(test)]
mod loader {
    use super::*;

    const ROUTES_CSV: &str = "\
route_name,waypoint_name,lat,lng,order
ring,South,12.90,77.58,1
airport,Majestic,12.9766,77.5713,0
airport,Airport,13.1986,77.7066,2
airport,Hebbal,13.0358,77.5970,1
ring,North,13.05,77.60,0
";

    const VEHICLES_CSV: &str = "\
vehicle_id,route_name
2,ring
0,airport
1,ghost-route
";

    #[test]
    fn routes_grouped_and_sorted_by_name() {
        let defs = load_routes_reader(Cursor::new(ROUTES_CSV)).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "airport");
        assert_eq!(defs[0].waypoints.len(), 3);
        assert_eq!(defs[1].name, "ring");
        assert_eq!(defs[1].waypoints.len(), 2);
    }

    #[test]
    fn waypoint_fields_parsed() {
        let defs = load_routes_reader(Cursor::new(ROUTES_CSV)).unwrap();
        let airport = &defs[0];
        // Row order in the file is shuffled; the `order` column carries the
        // traversal order and geometry construction sorts by it later.
        let majestic = airport.waypoints.iter().find(|w| w.name == "Majestic").unwrap();
        assert_eq!(majestic.order, 0);
        assert!((majestic.point.lat - 12.9766).abs() < 1e-9);
        assert!((majestic.point.lng - 77.5713).abs() < 1e-9);
    }

    #[test]
    fn vehicles_sorted_by_id_with_no_motion() {
        let records = load_vehicles_reader(Cursor::new(VEHICLES_CSV)).unwrap();
        let ids: Vec<u32> = records.iter().map(|r| r.vehicle.0).collect();
        assert_eq!(ids, [0, 1, 2]);
        // Unknown route names are tolerated here; they resolve to the
        // fallback route at tick time.
        assert_eq!(records[1].route_name, "ghost-route");
        assert!(records.iter().all(|r| r.motion.is_none() && r.history.is_none()));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let bad = "route_name,waypoint_name,lat,lng,order\nring,North,not-a-float,77.60,0\n";
        let err = load_routes_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, crate::StoreError::Parse(_)));
    }
}
