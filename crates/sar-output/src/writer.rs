//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, MetricsRow, OutputResult};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`MetricsOutputObserver::take_error`][crate::MetricsOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one per-tick metrics row.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Write a batch of discovery/rescue events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
