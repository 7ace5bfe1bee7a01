//! Plain data row types written by output backends.

use sar_metrics::{MetricsSnapshot, RescueEvent};

/// One tick's aggregate metrics, flattened for serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub tick: u64,
    pub coverage: f64,
    pub found: u32,
    pub rescued: u32,
    pub active_drones: u32,
}

impl From<&MetricsSnapshot> for MetricsRow {
    fn from(s: &MetricsSnapshot) -> Self {
        Self {
            tick: s.tick.0,
            coverage: s.coverage,
            found: s.found,
            rescued: s.rescued,
            active_drones: s.active_drones,
        }
    }
}

/// One discovery or rescue event, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// `"found"` or `"rescued"`.
    pub kind: String,
    pub drone: u32,
    pub victim: u32,
    pub tick: u64,
}

impl From<&RescueEvent> for EventRow {
    fn from(e: &RescueEvent) -> Self {
        Self {
            kind: e.kind.to_string(),
            drone: e.drone.0,
            victim: e.victim.0,
            tick: e.tick.0,
        }
    }
}
