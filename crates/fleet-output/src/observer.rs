//! `TickOutputObserver<W>` — bridges `TickObserver` to an `OutputWriter`.

use fleet_core::{Tick, Timestamp};
use fleet_motion::VehicleUpdate;
use fleet_sim::TickObserver;

use crate::row::{PositionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`TickObserver`] that writes every update and a per-tick summary to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the driver stops, check for errors with
/// [`take_error`][Self::take_error].
pub struct TickOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TickOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the driver stops.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TickObserver for TickOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, now: Timestamp, updates: &[VehicleUpdate]) {
        let rows: Vec<PositionRow> = updates
            .iter()
            .map(|u| PositionRow {
                vehicle_id:     u.vehicle.0,
                tick:           tick.0,
                unix_time_secs: u.state.last_updated.0,
                lat:            u.state.position.lat,
                lng:            u.state.position.lng,
                progress:       u.state.progress,
                direction:      u.state.direction.sign(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }

        let summary = TickSummaryRow {
            tick:             tick.0,
            unix_time_secs:   now.0,
            vehicles_updated: updates.len() as u64,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_stop(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
