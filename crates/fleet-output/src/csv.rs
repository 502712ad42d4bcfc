//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_positions.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, TickSummaryRow};

/// Writes the position stream to two CSV files.
pub struct CsvWriter {
    positions: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut positions = Writer::from_path(dir.join("vehicle_positions.csv"))?;
        positions.write_record([
            "vehicle_id", "tick", "unix_time_secs", "lat", "lng", "progress", "direction",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "unix_time_secs", "vehicles_updated"])?;

        Ok(Self {
            positions,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.vehicle_id.to_string(),
                row.tick.to_string(),
                row.unix_time_secs.to_string(),
                row.lat.to_string(),
                row.lng.to_string(),
                row.progress.to_string(),
                row.direction.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.vehicles_updated.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
