//! Dense id-indexed entity storage.

use sar_core::EntityId;

use crate::entity::{Drone, DroneState, Entity, EntityKind, KindTag, Victim};

/// Owns every entity in the simulation, indexed directly by `EntityId`.
///
/// IDs are handed out sequentially by [`spawn`][Self::spawn] during setup
/// and remain stable for the simulation lifetime — nothing is ever removed,
/// so `entities[id.index()]` is always the entity with that id.
#[derive(Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity of the given kind, returning its fresh id.
    pub fn spawn(&mut self, kind: EntityKind) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(Entity { id, kind });
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // ── Generic access ────────────────────────────────────────────────────

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// Payload-free kind of `id`, or `None` for an unknown id.
    pub fn tag_of(&self, id: EntityId) -> Option<KindTag> {
        self.get(id).map(|e| e.kind.tag())
    }

    /// Iterator over all entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterator over all `EntityId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.entities.len() as u32).map(EntityId)
    }

    // ── Kind-checked access ───────────────────────────────────────────────
    //
    // Each accessor returns `None` both for unknown ids and for ids of a
    // different kind, so call sites read as "give me the victim behind this
    // id, if that is what it is".

    pub fn victim(&self, id: EntityId) -> Option<&Victim> {
        match &self.get(id)?.kind {
            EntityKind::Victim(v) => Some(v),
            _ => None,
        }
    }

    pub fn victim_mut(&mut self, id: EntityId) -> Option<&mut Victim> {
        match &mut self.get_mut(id)?.kind {
            EntityKind::Victim(v) => Some(v),
            _ => None,
        }
    }

    pub fn drone(&self, id: EntityId) -> Option<&Drone> {
        match &self.get(id)?.kind {
            EntityKind::Drone(d) => Some(d),
            _ => None,
        }
    }

    pub fn drone_mut(&mut self, id: EntityId) -> Option<&mut Drone> {
        match &mut self.get_mut(id)?.kind {
            EntityKind::Drone(d) => Some(d),
            _ => None,
        }
    }

    // ── Population views ──────────────────────────────────────────────────

    /// All drones, in id order.
    pub fn drones(&self) -> impl Iterator<Item = (EntityId, &Drone)> {
        self.entities.iter().filter_map(|e| match &e.kind {
            EntityKind::Drone(d) => Some((e.id, d)),
            _ => None,
        })
    }

    /// All victims, in id order.
    pub fn victims(&self) -> impl Iterator<Item = (EntityId, &Victim)> {
        self.entities.iter().filter_map(|e| match &e.kind {
            EntityKind::Victim(v) => Some((e.id, v)),
            _ => None,
        })
    }

    /// Number of drones whose state is not `Failed`.
    pub fn active_drone_count(&self) -> u32 {
        self.drones()
            .filter(|(_, d)| d.state != DroneState::Failed)
            .count() as u32
    }
}
