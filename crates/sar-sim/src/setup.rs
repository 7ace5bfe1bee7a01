//! World population: hubs, obstacles, victims, drones — in that order.
//!
//! # Placement rules
//!
//! - Hubs take the fixed corner cells from the configuration (origin first,
//!   opposite corner second, then the remaining two).
//! - Obstacles land on uniformly sampled cells that hold no hub.
//! - Victims land on uniformly sampled cells that are neither blocked nor a
//!   hub cell.  Victims may share a cell with each other.
//! - Drones all start stacked on the first hub, which counts as visited.
//!
//! Obstacle and victim sampling retries up to [`PLACEMENT_ATTEMPTS`] times
//! per entity; exhaustion skips that entity, so a crowded configuration
//! yields fewer obstacles/victims than requested rather than an error.

use sar_agent::{Drone, EntityKind, EntityStore, Victim};
use sar_core::{Cell, SimRng, SwarmConfig, Tick};
use sar_grid::{Grid, VisitedTracker};
use sar_metrics::{MetricsCollector, RescueLog};
use sar_schedule::RandomActivation;

use crate::{SimResult, World};

/// Sampling attempts per obstacle/victim before giving up on it.
pub const PLACEMENT_ATTEMPTS: u32 = 200;

/// Build a populated, ready-to-run world from a validated configuration.
pub(crate) fn build(config: SwarmConfig) -> SimResult<World> {
    config.validate()?;

    let mut rng = SimRng::from_seed_opt(config.seed);
    let mut grid = Grid::new(config.width, config.height)?;
    let mut store = EntityStore::new();
    let mut scheduler = RandomActivation::new();
    let mut visited = VisitedTracker::new();

    // ── Hubs: fixed corner scheme ─────────────────────────────────────────
    let hubs = config.hub_cells();
    for &cell in &hubs {
        let id = store.spawn(EntityKind::Hub);
        grid.place(id, cell)?;
        scheduler.add(id);
    }

    // ── Obstacles: anywhere but a hub cell ────────────────────────────────
    for _ in 0..config.n_obstacles {
        let legal = |cell: Cell| !hubs.contains(&cell);
        if let Some(cell) = sample_cell(&mut rng, &config, legal) {
            let id = store.spawn(EntityKind::Obstacle);
            grid.place(id, cell)?;
            grid.block(cell)?;
            scheduler.add(id);
        }
    }

    // ── Victims: clear of obstacles and hubs ──────────────────────────────
    for _ in 0..config.n_victims {
        let legal = |cell: Cell| !grid.is_blocked(cell) && !hubs.contains(&cell);
        if let Some(cell) = sample_cell(&mut rng, &config, legal) {
            let id = store.spawn(EntityKind::Victim(Victim::new()));
            grid.place(id, cell)?;
            scheduler.add(id);
        }
    }

    // ── Drones: stacked on the first hub ──────────────────────────────────
    let start = hubs[0];
    for _ in 0..config.n_drones {
        let id = store.spawn(EntityKind::Drone(Drone::new(
            config.battery,
            config.sensor_prob,
            config.comms_radius,
        )));
        grid.place(id, start)?;
        scheduler.add(id);
        visited.record(start);
    }

    Ok(World {
        config,
        tick: Tick::ZERO,
        hubs,
        grid,
        store,
        scheduler,
        visited,
        log: RescueLog::new(),
        collector: MetricsCollector::new(),
        rng,
    })
}

/// Uniformly sample a cell satisfying `legal`, giving up after
/// [`PLACEMENT_ATTEMPTS`] rejections.
fn sample_cell(
    rng: &mut SimRng,
    config: &SwarmConfig,
    legal: impl Fn(Cell) -> bool,
) -> Option<Cell> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(0..config.width as i32),
            rng.gen_range(0..config.height as i32),
        );
        if legal(cell) {
            return Some(cell);
        }
    }
    None
}
