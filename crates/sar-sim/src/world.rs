//! The `World` struct and its tick loop.

use sar_agent::{EntityStore, KindTag, Portrayal};
use sar_behavior::{WorldCtx, drone_step, victim_step};
use sar_core::{Cell, EntityId, SimRng, SwarmConfig, Tick};
use sar_grid::{Grid, VisitedTracker};
use sar_metrics::{MetricsCollector, MetricsSnapshot, RescueLog};
use sar_schedule::RandomActivation;

use crate::{SimError, SimObserver, SimResult, setup};

/// One entity as the renderer sees it: identity, cell, and the kind-specific
/// fields for visual encoding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedEntity {
    pub id: EntityId,
    pub cell: Cell,
    pub portrayal: Portrayal,
}

/// The explicit simulation instance.
///
/// `World` owns every piece of simulation state — there is no ambient global
/// object.  Collaborators (renderer, metrics reporter) hold a reference and
/// consume the read-only snapshot queries; only [`advance`][Self::advance] /
/// [`run_ticks`][Self::run_ticks] mutate.
///
/// The model is single-threaded and turn-based: one entity's full activation
/// at a time, no preemption, no suspension.  The sole cross-entity mutation
/// inside an activation is the drone alert cascade (see `sar-behavior`);
/// anything that parallelizes activations must reproduce that ordering
/// explicitly.
pub struct World {
    pub(crate) config: SwarmConfig,
    pub(crate) tick: Tick,
    /// Precomputed hub cells in placement order — hub count is tiny and
    /// static, so navigation ranks this list instead of scanning the grid.
    pub(crate) hubs: Vec<Cell>,
    pub(crate) grid: Grid,
    pub(crate) store: EntityStore,
    pub(crate) scheduler: RandomActivation,
    pub(crate) visited: VisitedTracker,
    pub(crate) log: RescueLog,
    pub(crate) collector: MetricsCollector,
    pub(crate) rng: SimRng,
}

impl World {
    /// Validate `config` and build a populated world: hubs on their corners,
    /// obstacles and victims rejection-sampled into legal cells, drones
    /// stacked on the first hub.
    pub fn new(config: SwarmConfig) -> SimResult<World> {
        setup::build(config)
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// The tick about to be executed (0 before the first `advance`).
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn visited(&self) -> &VisitedTracker {
        &self.visited
    }

    pub fn log(&self) -> &RescueLog {
        &self.log
    }

    pub fn collector(&self) -> &MetricsCollector {
        &self.collector
    }

    pub fn hub_cells(&self) -> &[Cell] {
        &self.hubs
    }

    /// The current aggregate metrics, computed from live state.
    ///
    /// Pure derivation: calling this twice without an intervening tick
    /// returns identical values.
    pub fn metrics(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tick: self.tick,
            coverage: self.visited.coverage(self.grid.cell_count()),
            found: self.log.found(),
            rescued: self.log.rescued(),
            active_drones: self.store.active_drone_count(),
        }
    }

    /// The render view: every placed entity with its cell and portrayal.
    pub fn portrayals(&self) -> Vec<PlacedEntity> {
        self.store
            .iter()
            .filter_map(|e| {
                let cell = self.grid.position_of(e.id)?;
                Some(PlacedEntity { id: e.id, cell, portrayal: e.portrayal() })
            })
            .collect()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Execute exactly one tick: record the metrics row, then activate every
    /// entity once in a freshly randomized order, then advance the counter.
    pub fn advance(&mut self) -> SimResult<()> {
        let snapshot = self.metrics();
        self.collector.record(snapshot);

        let order = self.scheduler.order(&mut self.rng);
        let mut ctx = WorldCtx {
            tick: self.tick,
            config: &self.config,
            hubs: &self.hubs,
            grid: &mut self.grid,
            store: &mut self.store,
            visited: &mut self.visited,
            log: &mut self.log,
            rng: &mut self.rng,
        };
        for id in order {
            match ctx.store.tag_of(id) {
                Some(KindTag::Victim) => victim_step(&mut ctx, id)?,
                Some(KindTag::Drone) => drone_step(&mut ctx, id)?,
                Some(KindTag::Hub) | Some(KindTag::Obstacle) => {}
                None => return Err(SimError::UnknownEntity(id)),
            }
        }

        self.tick = self.tick + 1;
        Ok(())
    }

    /// Run `ticks` ticks, invoking observer hooks at every boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_ticks<O: SimObserver>(&mut self, ticks: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..ticks {
            let now = self.tick;
            observer.on_tick_start(now);
            self.advance()?;
            if let Some(row) = self.collector.last() {
                observer.on_tick_end(now, row);
            }
        }
        observer.on_sim_end(self.tick, &self.log);
        Ok(())
    }
}
