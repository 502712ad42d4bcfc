//! `fleet-core` — foundational types for the `fleet_track` position simulator.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `RouteId`                           |
//! | [`geo`]      | `GeoPoint`, haversine distance                   |
//! | [`time`]     | `Timestamp`, `Tick`                              |
//! | [`config`]   | `SimConfig` (step, period, history capacity)     |
//! | [`rng`]      | `VehicleRng` (deterministic per-vehicle)         |
//! | [`error`]    | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{RouteId, VehicleId};
pub use rng::VehicleRng;
pub use time::{Tick, Timestamp};
