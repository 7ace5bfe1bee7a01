//! Entity variants and their kind-specific state.

use std::fmt;

use sar_core::EntityId;

// ── Victim ────────────────────────────────────────────────────────────────────

/// An immobile victim whose health decays until rescue.
///
/// Victims are created once at setup and never relocated or destroyed; a
/// rescued victim persists with `rescued = true` for the rest of the run.
/// Health 0 is not removal either — an unfound victim at health 0 simply
/// becomes permanently unrescuable, because sensing requires health > 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Victim {
    /// Remaining health in [0, 100].
    pub health: u8,
    pub rescued: bool,
    /// Set when a drone first senses this victim; a found victim is claimed
    /// and ignored by all other sensors.
    pub found: bool,
}

impl Victim {
    pub const MAX_HEALTH: u8 = 100;

    pub fn new() -> Self {
        Self { health: Self::MAX_HEALTH, rescued: false, found: false }
    }

    /// Alive and still claimable by a sensing drone.
    #[inline]
    pub fn is_sensable(&self) -> bool {
        !self.found && self.health > 0
    }
}

impl Default for Victim {
    fn default() -> Self {
        Self::new()
    }
}

// ── Drone ─────────────────────────────────────────────────────────────────────

/// Drone behavioral state.
///
/// `Search` is the initial state; `Failed` is terminal with no outgoing
/// transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DroneState {
    Search,
    Deliver,
    Recharge,
    Failed,
}

impl fmt::Display for DroneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DroneState::Search => "search",
            DroneState::Deliver => "deliver",
            DroneState::Recharge => "recharge",
            DroneState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A searching drone: battery-limited, sensor-equipped, able to carry one
/// victim at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drone {
    /// Remaining charge in [0, max_battery].
    pub battery: u32,
    pub max_battery: u32,
    /// Per-trial detection probability in [0, 1].
    pub sensor_prob: f64,
    /// Chebyshev radius of the local alert broadcast.
    pub comms_radius: u32,
    /// Victim currently being carried, if any.  At most one.
    pub carrying: Option<EntityId>,
    pub state: DroneState,
}

impl Drone {
    pub fn new(battery: u32, sensor_prob: f64, comms_radius: u32) -> Self {
        Self {
            battery,
            max_battery: battery,
            sensor_prob,
            comms_radius,
            carrying: None,
            state: DroneState::Search,
        }
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        self.state == DroneState::Failed
    }

    /// Charge level at or below which an empty-handed drone heads home:
    /// 25% of capacity, in integer step costs.
    #[inline]
    pub fn low_battery_threshold(&self) -> u32 {
        self.max_battery / 4
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// Closed tagged variant over the four entity kinds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Victim(Victim),
    /// Supply hub: drop-off and recharge point.  Pure spatial landmark.
    Hub,
    /// Blocks traversal.  Static for the run.
    Obstacle,
    Drone(Drone),
}

/// Payload-free discriminant of [`EntityKind`], for dispatch sites that need
/// the kind without borrowing the variant data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KindTag {
    Victim,
    Hub,
    Obstacle,
    Drone,
}

impl EntityKind {
    #[inline]
    pub fn tag(&self) -> KindTag {
        match self {
            EntityKind::Victim(_) => KindTag::Victim,
            EntityKind::Hub => KindTag::Hub,
            EntityKind::Obstacle => KindTag::Obstacle,
            EntityKind::Drone(_) => KindTag::Drone,
        }
    }
}

/// An entity: stable identity plus kind-specific state.  Position lives in
/// the grid's reverse index, not here.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
}
