//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_metrics.csv`
//! - `rescue_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, MetricsRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    metrics: Writer<File>,
    events: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut metrics = Writer::from_path(dir.join("tick_metrics.csv"))?;
        metrics.write_record(["tick", "coverage", "found", "rescued", "active_drones"])?;

        let mut events = Writer::from_path(dir.join("rescue_events.csv"))?;
        events.write_record(["kind", "drone", "victim", "tick"])?;

        Ok(Self {
            metrics,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.coverage.to_string(),
            row.found.to_string(),
            row.rescued.to_string(),
            row.active_drones.to_string(),
        ])?;
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.kind.clone(),
                row.drone.to_string(),
                row.victim.to_string(),
                row.tick.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
