//! Per-vehicle motion state and the tick transition.

use fleet_core::{GeoPoint, Timestamp, VehicleRng};
use fleet_route::RouteGeometry;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Traversal direction along a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward the last waypoint (+1).
    Forward,
    /// Toward the first waypoint (-1).
    Backward,
}

impl Direction {
    /// Signed step multiplier: +1.0 forward, -1.0 backward.
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// Integer sign for compact serialization (+1 / -1).
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

// ── MotionState ───────────────────────────────────────────────────────────────

/// The motion state for a single vehicle.
///
/// Owned by the scheduler for the duration of a tick; the persisted snapshot
/// belongs to the external store between ticks.  No two ticks mutate the same
/// vehicle's state concurrently — the scheduler serializes ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionState {
    /// Fraction of the route's total length travelled, in [0, 1].
    pub progress: f64,

    /// Current traversal direction.
    pub direction: Direction,

    /// Position interpolated from `progress` at the last update.
    pub position: GeoPoint,

    /// When this state was last advanced.
    pub last_updated: Timestamp,
}

impl MotionState {
    /// Seed a fresh state for a vehicle observed for the first time.
    ///
    /// Progress is drawn uniformly from [0, 1] and direction from a fair
    /// coin, so a freshly seeded fleet spreads over its routes instead of
    /// clustering at the start waypoint.
    pub fn seeded(rng: &mut VehicleRng, geometry: &RouteGeometry, now: Timestamp) -> Self {
        let progress: f64 = rng.gen_range(0.0..=1.0);
        let direction = if rng.gen_bool(0.5) {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Self {
            progress,
            direction,
            position: geometry.interpolate(progress),
            last_updated: now,
        }
    }
}

// ── Tick transition ───────────────────────────────────────────────────────────

/// Advance a progress value by one step, reversing at the route ends.
///
/// The boundary rule is clamp-then-reverse: progress never leaves [0, 1] and
/// a boundary tick lands exactly on the boundary rather than bouncing past
/// it.  The reversed direction takes effect on the **next** tick.
pub fn advance_progress(progress: f64, direction: Direction, step: f64) -> (f64, Direction) {
    let next = progress + step * direction.signum();
    if next >= 1.0 {
        (1.0, Direction::Backward)
    } else if next <= 0.0 {
        (0.0, Direction::Forward)
    } else {
        (next, direction)
    }
}

/// The pure per-vehicle tick function: advance progress, reinterpolate the
/// position, stamp the update time.
///
/// No I/O and no shared state — the scheduler may run this for many vehicles
/// in parallel.
pub fn step_vehicle(
    state:    &MotionState,
    geometry: &RouteGeometry,
    step:     f64,
    now:      Timestamp,
) -> MotionState {
    let (progress, direction) = advance_progress(state.progress, state.direction, step);
    MotionState {
        progress,
        direction,
        position: geometry.interpolate(progress),
        last_updated: now,
    }
}
