//! `fleet-motion` — per-vehicle motion state and the tick step function.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`state`]   | `Direction`, `MotionState`, `advance_progress`, `step_vehicle` |
//! | [`history`] | `TrackPoint`, `PositionHistory` — bounded trail         |
//! | [`update`]  | `VehicleUpdate` — one vehicle's tick result             |
//!
//! # Motion model (oscillating traversal)
//!
//! A vehicle's place on its route is a progress fraction in [0, 1] plus a
//! direction.  Each tick:
//!
//! 1. `progress += step × direction`
//! 2. Hitting a boundary clamps progress to the boundary **and** reverses
//!    direction — the vehicle shuttles back and forth along the route and
//!    never overshoots either end.
//! 3. The new progress is interpolated to a coordinate on the route polyline.
//!
//! [`step_vehicle`] packages the three steps as a pure function of
//! `(state, geometry, step, now)` so the motion law is unit-testable without
//! any store or scheduler.

pub mod history;
pub mod state;
pub mod update;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use history::{PositionHistory, TrackPoint};
pub use state::{advance_progress, step_vehicle, Direction, MotionState};
pub use update::VehicleUpdate;
