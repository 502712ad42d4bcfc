//! The validated route polyline and progress interpolation.

use fleet_core::GeoPoint;

use crate::{RouteError, RouteResult, Waypoint};

/// An immutable route polyline with cached segment lengths.
///
/// Construct via [`RouteGeometry::new`], which sorts the waypoints and
/// rejects routes with fewer than two stops.  All derived values (segment
/// lengths, total length) are computed once at construction; a route update
/// replaces the whole geometry value atomically.
///
/// # Interpolation model
///
/// `interpolate` maps progress ∈ [0, 1] to a coordinate by linear
/// interpolation of lat and lng inside the active segment.  This is planar
/// interpolation over geographic coordinates — an approximation adequate at
/// typical route scales, not a geodesic.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteGeometry {
    name: String,
    waypoints: Vec<Waypoint>,
    /// `segment_lengths_km[i]` = distance from waypoint `i` to `i + 1`.
    segment_lengths_km: Vec<f64>,
    total_length_km: f64,
}

impl RouteGeometry {
    /// Build a geometry from unordered waypoints.
    ///
    /// Sorts by `Waypoint::order` (stable, so duplicate orders keep their
    /// input sequence) and precomputes segment lengths.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unroutable`] if fewer than two waypoints are
    /// supplied — such a route has no polyline to walk.
    pub fn new(name: impl Into<String>, mut waypoints: Vec<Waypoint>) -> RouteResult<Self> {
        let name = name.into();
        if waypoints.len() < 2 {
            return Err(RouteError::Unroutable {
                name,
                waypoints: waypoints.len(),
            });
        }

        waypoints.sort_by_key(|w| w.order);

        let segment_lengths_km: Vec<f64> = waypoints
            .windows(2)
            .map(|pair| pair[0].point.distance_km(pair[1].point))
            .collect();
        let total_length_km = segment_lengths_km.iter().sum();

        Ok(Self {
            name,
            waypoints,
            segment_lengths_km,
            total_length_km,
        })
    }

    /// The route's name as addressed at the store boundary.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waypoints in traversal order.  Never fewer than two.
    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Cached distance from waypoint `i` to `i + 1`, in kilometres.
    #[inline]
    pub fn segment_length_km(&self, i: usize) -> f64 {
        self.segment_lengths_km[i]
    }

    /// Number of straight segments (`waypoints().len() - 1`).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_lengths_km.len()
    }

    /// Cached total polyline length in kilometres.
    ///
    /// Zero if every waypoint coincides; interpolation still works in that
    /// case (it pins to the first waypoint).
    #[inline]
    pub fn total_length_km(&self) -> f64 {
        self.total_length_km
    }

    /// First waypoint of the route.
    #[inline]
    pub fn start(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    /// Last waypoint of the route.
    #[inline]
    pub fn end(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    /// Map `progress` to a position on the polyline.
    ///
    /// See [`locate`][Self::locate] for the segment-walk rules.
    #[inline]
    pub fn interpolate(&self, progress: f64) -> GeoPoint {
        self.locate(progress).0
    }

    /// Map `progress` to a position plus the index of the containing segment.
    ///
    /// Rules:
    /// - `progress <= 0` returns the first waypoint exactly (segment 0);
    /// - `progress >= 1` returns the last waypoint exactly (final segment),
    ///   so accumulated floating-point error can never walk past the end;
    /// - otherwise the target distance `progress * total_length` is walked
    ///   through the segments; the first segment whose cumulative length
    ///   reaches the target (inclusive) is active, and lat/lng are
    ///   interpolated linearly inside it.  A zero-length segment (coincident
    ///   waypoints) contributes its start point rather than a 0/0 division.
    pub fn locate(&self, progress: f64) -> (GeoPoint, usize) {
        let last_segment = self.segment_count() - 1;
        if progress <= 0.0 {
            return (self.start().point, 0);
        }
        if progress >= 1.0 {
            return (self.end().point, last_segment);
        }

        let target_km = progress * self.total_length_km;
        let mut accumulated_km = 0.0;

        for (i, &segment_km) in self.segment_lengths_km.iter().enumerate() {
            if target_km <= accumulated_km + segment_km {
                let a = self.waypoints[i].point;
                let b = self.waypoints[i + 1].point;
                let t = if segment_km > 0.0 {
                    (target_km - accumulated_km) / segment_km
                } else {
                    0.0
                };
                let point = GeoPoint::new(
                    a.lat + (b.lat - a.lat) * t,
                    a.lng + (b.lng - a.lng) * t,
                );
                return (point, i);
            }
            accumulated_km += segment_km;
        }

        // Only reachable through float rounding in the accumulation above.
        (self.end().point, last_segment)
    }
}
