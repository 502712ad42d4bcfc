//! Store traits and the record types that cross the boundary.

use fleet_core::VehicleId;
use fleet_motion::{MotionState, PositionHistory, VehicleUpdate};
use fleet_route::Waypoint;

use crate::StoreResult;

// ── Records ───────────────────────────────────────────────────────────────────

/// A raw route definition as stored: a name and an unvalidated waypoint list.
///
/// Validation (ordering, minimum length) happens in
/// `RouteGeometry::new` at the core boundary, not here — the store hands
/// back whatever it has.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDefinition {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
}

/// One vehicle as listed by the [`VehicleStore`] at tick start.
///
/// `motion`/`history` are `Some` when the store holds a persisted snapshot
/// (process restart, warm store) and `None` for a vehicle observed for the
/// first time — the scheduler then seeds a randomized state.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRecord {
    pub vehicle: VehicleId,
    /// Name of the route this vehicle serves, resolved via [`RouteStore`].
    pub route_name: String,
    pub motion: Option<MotionState>,
    pub history: Option<PositionHistory>,
}

// ── Traits ────────────────────────────────────────────────────────────────────

/// Read access to route definitions.
///
/// # Latency contract
///
/// The scheduler calls this synchronously inside its tick; implementations
/// must bound their own call latency well below the tick period (backing a
/// lookup with an un-bounded network call would stall the whole fleet).
///
/// # Thread safety
///
/// `Send + Sync` so a store can be shared with a parallel advance phase.
pub trait RouteStore: Send + Sync {
    /// Look up a route by name.  `Ok(None)` means the route does not exist —
    /// a recoverable condition, distinct from a backend failure.
    fn route_by_name(&self, name: &str) -> StoreResult<Option<RouteDefinition>>;
}

/// Read/write access to the vehicle fleet.
pub trait VehicleStore: Send + Sync {
    /// All vehicles to simulate this tick, with any persisted state.
    fn list_vehicles(&self) -> StoreResult<Vec<VehicleRecord>>;

    /// Persist one vehicle's tick result.  Failures are isolated per
    /// vehicle by the scheduler; implementations should not panic.
    fn save_update(&mut self, update: &VehicleUpdate) -> StoreResult<()>;
}
