//! Tick observer trait for progress reporting and data collection.

use fleet_core::{Tick, Timestamp};
use fleet_motion::VehicleUpdate;

/// Callbacks invoked by [`TickDriver`][crate::TickDriver] around each tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console position printer
///
/// ```rust,ignore
/// struct PositionPrinter;
///
/// impl TickObserver for PositionPrinter {
///     fn on_tick_end(&mut self, tick: Tick, _now: Timestamp, updates: &[VehicleUpdate]) {
///         for u in updates {
///             println!("{tick} {} {}", u.vehicle, u.state.position);
///         }
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called immediately before a tick runs.
    fn on_tick_start(&mut self, _tick: Tick, _now: Timestamp) {}

    /// Called after a tick with every vehicle update it produced.
    ///
    /// Skipped vehicles (store failure, unroutable route) have no entry;
    /// a failed tick reports an empty slice.
    fn on_tick_end(&mut self, _tick: Tick, _now: Timestamp, _updates: &[VehicleUpdate]) {}

    /// Called once when the driver stops.
    fn on_stop(&mut self, _final_tick: Tick) {}
}

/// A [`TickObserver`] that does nothing.  Use when driving the scheduler
/// without callbacks.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
