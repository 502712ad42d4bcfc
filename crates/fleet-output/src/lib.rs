//! `fleet-output` — position stream writers for the fleet_track simulator.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                    | One row per            |
//! |-------------------------|------------------------|
//! | `vehicle_positions.csv` | vehicle update         |
//! | `tick_summaries.csv`    | tick                   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TickOutputObserver`], which implements `fleet_sim::TickObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_output::{CsvWriter, TickOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TickOutputObserver::new(writer);
//! driver.run_for(1_000, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TickOutputObserver;
pub use row::{PositionRow, TickSummaryRow};
pub use writer::OutputWriter;
