//! Strongly typed, zero-cost entity identifier.
//!
//! One ID space covers all four entity kinds (victims, hubs, obstacles,
//! drones): IDs are handed out sequentially at setup and stay stable for the
//! lifetime of the simulation, so `id.0 as usize` indexes the entity store
//! directly.  The inner integer is `pub` for that reason, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of an entity in the simulation's entity store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<EntityId> for usize {
    #[inline(always)]
    fn from(id: EntityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for EntityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<EntityId, Self::Error> {
        u32::try_from(n).map(EntityId)
    }
}
