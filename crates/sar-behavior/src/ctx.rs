//! The mutable world view an activation runs against.

use sar_agent::{Drone, EntityStore, Victim};
use sar_core::{Cell, EntityId, SimRng, SwarmConfig, Tick};
use sar_grid::{Grid, VisitedTracker};
use sar_metrics::RescueLog;

use crate::{BehaviorError, BehaviorResult};

/// Split borrows of everything one activation may read or write.
///
/// The simulation owns all of these as separate fields precisely so it can
/// lend them out together here — a single "world" borrow would make it
/// impossible to, say, move one drone on the grid while reading another's
/// state from the store.  The context lives for one full activation pass
/// (one tick); activations run strictly one at a time, so no locking is
/// involved.
pub struct WorldCtx<'a> {
    /// The tick currently being executed.  Event records carry this stamp.
    pub tick: Tick,
    pub config: &'a SwarmConfig,
    /// Precomputed hub cells in placement order.  Hubs are static, so the
    /// nearest-hub query ranks this list instead of scanning the grid.
    pub hubs: &'a [Cell],
    pub grid: &'a mut Grid,
    pub store: &'a mut EntityStore,
    pub visited: &'a mut VisitedTracker,
    pub log: &'a mut RescueLog,
    pub rng: &'a mut SimRng,
}

impl WorldCtx<'_> {
    // Result-typed accessors: the ids flowing through the controller come
    // from the grid and the roster, so a miss is an index-corruption bug
    // worth surfacing, not a panic.

    /// Current cell of `id`.
    pub fn position(&self, id: EntityId) -> BehaviorResult<Cell> {
        self.grid
            .position_of(id)
            .ok_or(BehaviorError::MissingEntity(id))
    }

    pub fn drone(&self, id: EntityId) -> BehaviorResult<&Drone> {
        self.store
            .drone(id)
            .ok_or(BehaviorError::MissingEntity(id))
    }

    pub fn drone_mut(&mut self, id: EntityId) -> BehaviorResult<&mut Drone> {
        self.store
            .drone_mut(id)
            .ok_or(BehaviorError::MissingEntity(id))
    }

    pub fn victim(&self, id: EntityId) -> BehaviorResult<&Victim> {
        self.store
            .victim(id)
            .ok_or(BehaviorError::MissingEntity(id))
    }

    pub fn victim_mut(&mut self, id: EntityId) -> BehaviorResult<&mut Victim> {
        self.store
            .victim_mut(id)
            .ok_or(BehaviorError::MissingEntity(id))
    }

    /// `true` if `cell` hosts a supply hub.
    #[inline]
    pub fn is_hub_cell(&self, cell: Cell) -> bool {
        self.hubs.contains(&cell)
    }
}
