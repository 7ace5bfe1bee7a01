//! `MetricsOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sar_core::Tick;
use sar_metrics::{MetricsSnapshot, RescueLog};
use sar_sim::SimObserver;

use crate::row::{EventRow, MetricsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams the per-tick metrics series into any
/// [`OutputWriter`] backend and dumps the full event log at the end of the
/// run.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `run_ticks` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct MetricsOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MetricsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run completes.
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

impl<W: OutputWriter> SimObserver for MetricsOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, metrics: &MetricsSnapshot) {
        let row = MetricsRow::from(metrics);
        let result = self.writer.write_metrics(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, log: &RescueLog) {
        let rows: Vec<EventRow> = log.events().iter().map(EventRow::from).collect();
        if !rows.is_empty() {
            let result = self.writer.write_events(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
