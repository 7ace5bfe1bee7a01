//! basic — the reference disaster-recovery scenario for rust_sar.
//!
//! Runs the default 20×20 world (6 drones, 8 victims, 1 hub, 20 obstacles)
//! for a fixed number of ticks, streams the metrics series to CSV, and
//! prints a per-drone summary table.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sar_agent::DroneState;
use sar_core::{SwarmConfig, Tick};
use sar_metrics::MetricsSnapshot;
use sar_output::{CsvWriter, MetricsOutputObserver, OutputWriter};
use sar_sim::{SimObserver, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TICKS: u64 = 500;
const PROGRESS_INTERVAL: u64 = 100;

// ── Observer wrapper printing periodic progress ───────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner: MetricsOutputObserver<W>,
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, metrics: &MetricsSnapshot) {
        if tick.0 % PROGRESS_INTERVAL == 0 {
            println!(
                "{tick}: coverage {:.1}%  found {}  rescued {}  active {}",
                metrics.coverage * 100.0,
                metrics.found,
                metrics.rescued,
                metrics.active_drones,
            );
        }
        self.inner.on_tick_end(tick, metrics);
    }

    fn on_sim_end(&mut self, final_tick: Tick, log: &sar_metrics::RescueLog) {
        self.inner.on_sim_end(final_tick, log);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== basic — rust_sar drone swarm disaster recovery ===");

    // 1. Configuration: the reference scenario with a fixed seed.
    let config = SwarmConfig { seed: Some(SEED), ..SwarmConfig::default() };
    println!(
        "Grid {}x{}  |  drones {}  victims {}  hubs {}  obstacles {}  |  seed {SEED}",
        config.width, config.height, config.n_drones, config.n_victims, config.n_hubs,
        config.n_obstacles,
    );
    println!();

    // 2. Build the world.
    let mut world = World::new(config)?;

    // 3. Set up CSV output.
    std::fs::create_dir_all("output/basic")?;
    let writer = CsvWriter::new(Path::new("output/basic"))?;
    let mut obs = ProgressObserver { inner: MetricsOutputObserver::new(writer) };

    // 4. Run.
    let t0 = Instant::now();
    world.run_ticks(TICKS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let metrics = world.metrics();
    println!();
    println!("Run complete: {TICKS} ticks in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  coverage {:.1}%  |  found {}/{}  rescued {}  |  events {}",
        metrics.coverage * 100.0,
        metrics.found,
        world.config().n_victims,
        metrics.rescued,
        world.log().len(),
    );
    println!();

    // 6. Final drone table.
    println!("{:<10} {:<10} {:<10} {:<10}", "Drone", "State", "Battery", "Cell");
    println!("{}", "-".repeat(42));
    for (id, drone) in world.store().drones() {
        let cell = world
            .grid()
            .position_of(id)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".into());
        let state = drone.state;
        let lost = matches!(state, DroneState::Failed);
        println!(
            "{:<10} {:<10} {:<10} {:<10}{}",
            id.0,
            state.to_string(),
            format!("{}/{}", drone.battery, drone.max_battery),
            cell,
            if lost { "  (lost)" } else { "" },
        );
    }

    Ok(())
}
