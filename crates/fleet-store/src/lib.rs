//! `fleet-store` — the persistence boundary of the fleet_track simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`traits`] | `RouteStore`, `VehicleStore`, record types            |
//! | [`memory`] | `MemoryRouteStore`, `MemoryVehicleStore`              |
//! | [`loader`] | CSV fleet seeding (`load_routes_csv`, …)              |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                        |
//!
//! The simulation core only ever talks to collaborators through the two
//! traits here.  Real deployments back them with whatever database the
//! surrounding service uses; tests and embedded setups use the in-memory
//! implementations, optionally seeded from CSV files.

pub mod error;
pub mod loader;
pub mod memory;
pub mod traits;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StoreError, StoreResult};
pub use loader::{load_routes_csv, load_routes_reader, load_vehicles_csv, load_vehicles_reader};
pub use memory::{MemoryRouteStore, MemoryVehicleStore};
pub use traits::{RouteDefinition, RouteStore, VehicleRecord, VehicleStore};
