//! Top-level simulation configuration.
//!
//! # Validation policy
//!
//! Invalid configuration fails fast at setup with [`SarError::Config`] —
//! values are never silently clamped.  Runtime conditions (a drone running
//! out of battery, a victim's health reaching 0, a boxed-in drone) are state
//! transitions, not errors, and have no representation here.

use crate::{Cell, SarError, SarResult};

/// Maximum number of supply hubs; one per grid corner.
pub const MAX_HUBS: u32 = 4;

/// Configuration accepted by the world setup contract.
///
/// `Default` mirrors the reference scenario: a 20×20 area, 6 drones, 8
/// victims, a single hub, 20 obstacles.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    /// Grid width in cells.  Must be ≥ 1.
    pub width: u32,
    /// Grid height in cells.  Must be ≥ 1.
    pub height: u32,

    /// Number of drones, all starting at the first hub.
    pub n_drones: u32,
    /// Number of victims requested.  Placement exhaustion may reduce this.
    pub n_victims: u32,
    /// Number of supply hubs, 1–4.  Hubs occupy grid corners in a fixed
    /// order: (0,0), then the opposite corner, then the remaining two.
    pub n_hubs: u32,
    /// Number of obstacles requested.  Placement exhaustion may reduce this.
    pub n_obstacles: u32,

    /// Battery capacity per drone, in step costs.  Must be ≥ 1.
    pub battery: u32,
    /// Probability a co-located, undiscovered victim is detected per sensing
    /// trial.  Must lie in [0, 1].
    pub sensor_prob: f64,
    /// Chebyshev radius of the local alert broadcast.  0 disables alerts.
    pub comms_radius: u32,

    /// Health lost per tick by every unrescued victim.
    pub victim_decay_per_tick: u8,
    /// Battery drained by one activation that moves or acts.  Must be ≥ 1.
    pub battery_cost_per_step: u32,

    /// Master RNG seed.  `Some` makes the run exactly reproducible; `None`
    /// seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            n_drones: 6,
            n_victims: 8,
            n_hubs: 1,
            n_obstacles: 20,
            battery: 100,
            sensor_prob: 0.9,
            comms_radius: 2,
            victim_decay_per_tick: 1,
            battery_cost_per_step: 1,
            seed: None,
        }
    }
}

impl SwarmConfig {
    /// Validate every field, failing fast on the first violation.
    pub fn validate(&self) -> SarResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SarError::Config(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.n_hubs < 1 || self.n_hubs > MAX_HUBS {
            return Err(SarError::Config(format!(
                "hub count must be 1-{MAX_HUBS}, got {}",
                self.n_hubs
            )));
        }
        let hubs = self.hub_cells();
        for (i, a) in hubs.iter().enumerate() {
            if hubs[..i].contains(a) {
                return Err(SarError::Config(format!(
                    "{}x{} grid has too few distinct corners for {} hubs",
                    self.width, self.height, self.n_hubs
                )));
            }
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.sensor_prob) {
            return Err(SarError::Config(format!(
                "sensor probability must lie in [0, 1], got {}",
                self.sensor_prob
            )));
        }
        if self.battery == 0 {
            return Err(SarError::Config("battery capacity must be at least 1".into()));
        }
        if self.battery_cost_per_step == 0 {
            return Err(SarError::Config(
                "battery cost per step must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The fixed corner cells the configured hubs occupy, in placement
    /// order: origin, opposite corner, then the remaining two corners.
    /// Drones start at the first entry.
    pub fn hub_cells(&self) -> Vec<Cell> {
        let w = self.width as i32 - 1;
        let h = self.height as i32 - 1;
        let corners = [
            Cell::new(0, 0),
            Cell::new(w, h),
            Cell::new(w, 0),
            Cell::new(0, h),
        ];
        corners[..self.n_hubs.min(MAX_HUBS) as usize].to_vec()
    }
}
