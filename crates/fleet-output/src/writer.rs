//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PositionRow, TickSummaryRow};

/// Trait implemented by position-stream backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TickOutputObserver::take_error`][crate::TickOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of position rows (one tick's updates).
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
