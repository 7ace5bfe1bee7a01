//! `RandomActivation` — every entity acts once per tick, in random order.
//!
//! # Why a full shuffle, not a queue
//!
//! Every entity in this model is live every tick (victims decay, drones run
//! their state machine), so there is nothing to gain from a sparse wake
//! queue — the activation set IS the whole roster.  What matters instead is
//! *order*: a drone that receives an alert mid-tick can still act on it that
//! same tick only if it happens to be activated after the alerting drone.
//! Drawing a **fresh permutation every tick** (not a fixed rotation) keeps
//! that cascade ordering unbiased across ticks.
//!
//! All shuffling draws from the simulation's seeded [`SimRng`], so a fixed
//! seed reproduces the exact permutation sequence.

use sar_core::{EntityId, SimRng};

/// The roster of live entities and the per-tick activation order over it.
#[derive(Default)]
pub struct RandomActivation {
    /// Stable base order: insertion order at setup.  Never reordered.
    roster: Vec<EntityId>,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the roster.  Entities are never removed — terminal
    /// states (failed drones, rescued victims) stay scheduled and simply
    /// no-op their activations.
    pub fn add(&mut self, id: EntityId) {
        self.roster.push(id);
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The roster in its stable base order.
    pub fn ids(&self) -> &[EntityId] {
        &self.roster
    }

    /// A freshly randomized activation order for one tick.
    ///
    /// Each call draws a new permutation of the full roster from `rng`; the
    /// base order is left untouched.
    pub fn order(&self, rng: &mut SimRng) -> Vec<EntityId> {
        let mut order = self.roster.clone();
        rng.shuffle(&mut order);
        order
    }
}
