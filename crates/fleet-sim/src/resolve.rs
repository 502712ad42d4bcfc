//! Route resolution outcomes and the fallback route.

use std::sync::Arc;

use fleet_route::{RouteGeometry, RouteResult, Waypoint};

/// Name the fallback geometry is registered under.
pub const FALLBACK_ROUTE_NAME: &str = "default";

/// How a vehicle's route name resolved this tick.
///
/// Explicit variants instead of sentinel values: the scheduler branches on
/// the outcome, and a reader of the tick loop can see all three paths.
#[derive(Clone, Debug)]
pub enum RouteResolution {
    /// The named route exists and is simulatable; cached for later ticks.
    Bound(Arc<RouteGeometry>),

    /// The named route does not exist.  The vehicle runs on the shared
    /// fallback geometry — degraded but visible motion, re-resolved every
    /// tick so the real route binds as soon as it appears.
    Fallback(Arc<RouteGeometry>),

    /// The named route exists but cannot be simulated (fewer than two
    /// waypoints).  The vehicle is skipped this tick.
    Unroutable,
}

/// The minimal two-waypoint geometry vehicles fall back to when their named
/// route is missing from the store.
///
/// The coordinates are a short fixed hop, inherited from the system this
/// simulator models; they exist so a misconfigured vehicle still shows
/// sensible motion on a map instead of stalling or vanishing.
pub fn default_route() -> RouteResult<RouteGeometry> {
    RouteGeometry::new(
        FALLBACK_ROUTE_NAME,
        vec![
            Waypoint::new("Default Start", 28.6139, 77.209, 0),
            Waypoint::new("Default End", 28.65, 77.242, 1),
        ],
    )
}
