//! One tick's aggregate metrics row.

use sar_core::Tick;

/// Aggregate simulation metrics at a single point in time.
///
/// Plain `Copy` data: computing the same snapshot twice without an
/// intervening tick yields identical values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    /// The tick this snapshot was taken on.
    pub tick: Tick,
    /// Fraction of grid cells ever visited by any drone, in [0, 1].
    pub coverage: f64,
    /// Victims sensed so far.
    pub found: u32,
    /// Victims delivered alive to a hub so far.
    pub rescued: u32,
    /// Drones whose state is not `failed`.
    pub active_drones: u32,
}
