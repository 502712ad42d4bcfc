//! Named, ordered stops along a route.

use fleet_core::GeoPoint;

/// One stop on a route's polyline.
///
/// Waypoints of a route are totally ordered by `order`; the value is unique
/// within its route.  Equal orders would make the polyline ambiguous, so
/// [`RouteGeometry::new`][crate::RouteGeometry::new] sorts with a stable sort
/// and keeps the input order for ties rather than guessing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Human-readable stop name ("Majestic", "Airport", …).
    pub name: String,

    /// Fixed position of the stop.
    pub point: GeoPoint,

    /// Position of this stop in the route's traversal order.
    pub order: u32,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, order: u32) -> Self {
        Self {
            name: name.into(),
            point: GeoPoint::new(lat, lng),
            order,
        }
    }
}
