//! The drone decision state machine.
//!
//! One call to [`drone_step`] is one activation: exactly one of the four
//! branches below runs, checked in priority order.
//!
//! ```text
//! ① battery empty      → Failed (terminal; no battery or position change)
//! ② carrying a victim  → Deliver: step toward nearest hub, drop off on
//!                        arrival (rescue if still alive), refill battery
//! ③ battery low        → Recharge: step toward nearest hub, refill there
//! ④ otherwise          → Search: sense own cell; on a hit claim the victim
//!                        and alert peers in comms range, else explore
//! ```
//!
//! Branches ②–④ all end by charging the per-step battery cost, whether or
//! not the drone actually moved — hovering in place costs the same as a
//! step, and a completed delivery ends the tick at `max_battery - cost`.

use sar_agent::DroneState;
use sar_core::{Cell, EntityId};

use crate::nav::{nearest_hub, step_towards, unexplored_adjacent};
use crate::{BehaviorResult, WorldCtx};

/// Run one activation of the drone `id`.
pub fn drone_step(ctx: &mut WorldCtx<'_>, id: EntityId) -> BehaviorResult<()> {
    let (battery, carrying, low_battery) = {
        let drone = ctx.drone(id)?;
        (drone.battery, drone.carrying, drone.low_battery_threshold())
    };

    // ① Battery exhausted: terminal failure.  The drone stays in the world
    // as an inert sprite and never acts, alerts, or counts as active again.
    // Any cargo is dropped where it falls — the victim is already claimed
    // (`found`), so no other drone will come for it.
    if battery == 0 {
        let drone = ctx.drone_mut(id)?;
        drone.state = DroneState::Failed;
        drone.carrying = None;
        return Ok(());
    }

    if let Some(victim_id) = carrying {
        return deliver(ctx, id, victim_id);
    }

    if battery <= low_battery {
        return recharge(ctx, id);
    }

    search(ctx, id)
}

// ── ② Deliver ─────────────────────────────────────────────────────────────────

/// Head for the nearest hub with the carried victim; on arrival rescue it
/// (if it survived the trip), then reset to a fresh full-battery search.
///
/// `carrying` is cleared on arrival regardless of the victim's health — a
/// victim that expired in transit is simply set down, unrescued.
fn deliver(ctx: &mut WorldCtx<'_>, id: EntityId, victim_id: EntityId) -> BehaviorResult<()> {
    ctx.drone_mut(id)?.state = DroneState::Deliver;

    let pos = ctx.position(id)?;
    if let Some(hub) = nearest_hub(ctx.hubs, pos) {
        step_towards(ctx, id, hub)?;
    }

    let here = ctx.position(id)?;
    if ctx.is_hub_cell(here) {
        let delivered_alive = {
            let victim = ctx.victim_mut(victim_id)?;
            if victim.health > 0 {
                victim.rescued = true;
                victim.found = true;
                true
            } else {
                false
            }
        };
        if delivered_alive {
            ctx.log.record_rescued(id, victim_id, ctx.tick);
        }

        let drone = ctx.drone_mut(id)?;
        drone.carrying = None;
        drone.state = DroneState::Search;
        drone.battery = drone.max_battery;
    }

    spend_step_cost(ctx, id)
}

// ── ③ Recharge ────────────────────────────────────────────────────────────────

/// Head for the nearest hub and refill there.
fn recharge(ctx: &mut WorldCtx<'_>, id: EntityId) -> BehaviorResult<()> {
    ctx.drone_mut(id)?.state = DroneState::Recharge;

    let pos = ctx.position(id)?;
    if let Some(hub) = nearest_hub(ctx.hubs, pos) {
        step_towards(ctx, id, hub)?;
    }

    let here = ctx.position(id)?;
    if ctx.is_hub_cell(here) {
        let drone = ctx.drone_mut(id)?;
        drone.battery = drone.max_battery;
        drone.state = DroneState::Search;
    }

    spend_step_cost(ctx, id)
}

// ── ④ Search ──────────────────────────────────────────────────────────────────

/// Sense the current cell; on a hit, claim the victim and alert peers.
/// Otherwise push the frontier: prefer an unvisited neighbor, fall back to
/// any reachable one, stay put only when boxed in.
fn search(ctx: &mut WorldCtx<'_>, id: EntityId) -> BehaviorResult<()> {
    ctx.drone_mut(id)?.state = DroneState::Search;
    let pos = ctx.position(id)?;

    if let Some(victim_id) = sense_victim(ctx, id, pos)? {
        ctx.victim_mut(victim_id)?.found = true;
        ctx.log.record_found(id, victim_id, ctx.tick);
        ctx.drone_mut(id)?.carrying = Some(victim_id);
        broadcast_alert(ctx, id, victim_id)?;
        return spend_step_cost(ctx, id);
    }

    let dest = match unexplored_adjacent(ctx, pos) {
        Some(cell) => cell,
        None => {
            // Everything adjacent is explored: wander to any reachable
            // neighbor, or hold position when obstacles box us in.
            let open: Vec<Cell> = ctx
                .grid
                .neighborhood(pos, 1, false)
                .into_iter()
                .filter(|&c| !ctx.grid.is_blocked(c))
                .collect();
            ctx.rng.choose(&open).copied().unwrap_or(pos)
        }
    };

    if ctx.grid.move_to(id, dest)? {
        ctx.visited.record(dest);
    }
    spend_step_cost(ctx, id)
}

/// Run a Bernoulli detection trial against every claimable victim sharing
/// the drone's cell (only the current cell — the sensor has no reach).
/// First success wins; a failed trial moves on to the next candidate.
fn sense_victim(
    ctx: &mut WorldCtx<'_>,
    id: EntityId,
    pos: Cell,
) -> BehaviorResult<Option<EntityId>> {
    let sensor_prob = ctx.drone(id)?.sensor_prob;
    let co_located: Vec<EntityId> = ctx.grid.contents(pos).to_vec();
    for candidate in co_located {
        let Some(victim) = ctx.store.victim(candidate) else {
            continue;
        };
        if victim.is_sensable() && ctx.rng.gen_bool(sensor_prob) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Broadcast a discovery to every non-failed drone within the sender's
/// comms radius (Moore neighborhood, center cell excluded — a co-located
/// peer will sense the cell itself).
///
/// An eligible peer — idle in Search, carrying nothing — immediately takes
/// one step toward the victim, *during the sender's activation*.  This is
/// the one place an activation mutates another entity; see the crate docs.
/// A peer whose step lands out of bounds or on an obstacle simply does not
/// move this tick.
fn broadcast_alert(
    ctx: &mut WorldCtx<'_>,
    sender: EntityId,
    victim_id: EntityId,
) -> BehaviorResult<()> {
    if ctx.victim(victim_id)?.health == 0 {
        return Ok(());
    }
    let Some(victim_pos) = ctx.grid.position_of(victim_id) else {
        return Ok(());
    };

    let pos = ctx.position(sender)?;
    let radius = ctx.drone(sender)?.comms_radius;

    let mut peers: Vec<EntityId> = Vec::new();
    for cell in ctx.grid.neighborhood(pos, radius, false) {
        for &other in ctx.grid.contents(cell) {
            if let Some(drone) = ctx.store.drone(other) {
                if !drone.is_failed() {
                    peers.push(other);
                }
            }
        }
    }

    for peer in peers {
        let drone = ctx.drone(peer)?;
        if drone.carrying.is_none() && drone.state == DroneState::Search {
            step_towards(ctx, peer, victim_pos)?;
        }
    }
    Ok(())
}

// ── Battery accounting ────────────────────────────────────────────────────────

/// Charge one activation's battery cost, saturating at 0.  The failure
/// transition itself happens at the start of the drone's next activation.
fn spend_step_cost(ctx: &mut WorldCtx<'_>, id: EntityId) -> BehaviorResult<()> {
    let cost = ctx.config.battery_cost_per_step;
    let drone = ctx.drone_mut(id)?;
    drone.battery = drone.battery.saturating_sub(cost);
    Ok(())
}
