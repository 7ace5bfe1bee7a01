//! `sar-output` — simulation output writers for the rust_sar simulation.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                | Contents                                        |
//! |---------------------|-------------------------------------------------|
//! | `tick_metrics.csv`  | one metrics row per tick (the collector series) |
//! | `rescue_events.csv` | the full found/rescued event log                |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`MetricsOutputObserver`], which implements `sar_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sar_output::{CsvWriter, MetricsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MetricsOutputObserver::new(writer);
//! world.run_ticks(500, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MetricsOutputObserver;
pub use row::{EventRow, MetricsRow};
pub use writer::OutputWriter;
