//! The read-only render query.
//!
//! The visualization layer is an external collaborator: it asks each entity
//! for its variant tag and the handful of fields it needs for visual
//! encoding (a battery fraction to fade drone colors, a health fraction to
//! fade victims, nothing for the static kinds).  It gets exactly that and no
//! mutable access.

use crate::entity::{DroneState, Entity, EntityKind};

/// What a renderer needs to draw one entity, by kind.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Portrayal {
    Drone {
        battery: u32,
        max_battery: u32,
        state: DroneState,
    },
    Victim {
        health: u8,
        rescued: bool,
    },
    Hub,
    Obstacle,
}

impl Entity {
    /// The render portrayal of this entity.
    pub fn portrayal(&self) -> Portrayal {
        match &self.kind {
            EntityKind::Drone(d) => Portrayal::Drone {
                battery: d.battery,
                max_battery: d.max_battery,
                state: d.state,
            },
            EntityKind::Victim(v) => Portrayal::Victim {
                health: v.health,
                rescued: v.rescued,
            },
            EntityKind::Hub => Portrayal::Hub,
            EntityKind::Obstacle => Portrayal::Obstacle,
        }
    }
}
