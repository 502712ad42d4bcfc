//! `fleet-sim` — tick scheduler for the fleet_track simulator.
//!
//! # Three-phase tick
//!
//! ```text
//! run_tick(now):
//!   ① Resolve  — list vehicles from the VehicleStore; per vehicle, bind a
//!                route geometry (cache → RouteStore → fallback route) and
//!                adopt or seed its motion state.  A store failure or an
//!                unroutable route skips that vehicle only.
//!   ② Advance  — apply the pure motion step to every resolved vehicle
//!                (Rayon-parallel with the `parallel` feature; vehicles are
//!                independent).
//!   ③ Persist  — in ascending VehicleId order: append to the bounded
//!                history, save through the VehicleStore, emit the
//!                VehicleUpdate.  A save failure is logged and isolated.
//! ```
//!
//! Ticks are globally serialized: `run_tick` takes `&mut self`, so a second
//! tick cannot start while one is in flight, and [`TickDriver`] additionally
//! drops missed periods when a tick overruns its wall-clock budget instead
//! of bursting to catch up.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the advance phase on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_core::SimConfig;
//! use fleet_sim::{NoopObserver, SchedulerBuilder, TickDriver};
//! use fleet_store::{MemoryRouteStore, MemoryVehicleStore};
//!
//! let scheduler = SchedulerBuilder::new(SimConfig::default(), routes, vehicles)
//!     .build()?;
//! let mut driver = TickDriver::new(scheduler);
//! driver.run_for(100, &mut NoopObserver);
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod resolve;
pub mod scheduler;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SchedulerBuilder;
pub use driver::TickDriver;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TickObserver};
pub use resolve::{default_route, RouteResolution};
pub use scheduler::Scheduler;
