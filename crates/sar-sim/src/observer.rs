//! Simulation observer trait for progress reporting and data collection.

use sar_core::Tick;
use sar_metrics::{MetricsSnapshot, RescueLog};

/// Callbacks invoked by [`World::run_ticks`][crate::World::run_ticks] at
/// tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, m: &MetricsSnapshot) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} rescued", m.rescued);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with that tick's recorded metrics row.
    ///
    /// The row is the one the collector recorded at the *start* of the tick,
    /// so it reflects the state at the end of the previous tick — the same
    /// series the charting layer reads.  Query the world directly for live
    /// end-of-tick state.
    fn on_tick_end(&mut self, _tick: Tick, _metrics: &MetricsSnapshot) {}

    /// Called once after the final tick, with the full discovery/rescue log.
    fn on_sim_end(&mut self, _final_tick: Tick, _log: &RescueLog) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
