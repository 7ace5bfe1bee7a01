//! Navigation primitives shared by every movement branch.

use sar_core::{Cell, EntityId};

use crate::{BehaviorResult, WorldCtx};

/// Move `id` one greedy step toward `target`.
///
/// Each axis delta is clamped independently to {-1, 0, +1}; the step is
/// silently skipped when the candidate cell is out of bounds or blocked by
/// an obstacle — the entity stays put and the caller still charges the step
/// cost.  A successful step records the destination as visited (delivery
/// and recharge legs count toward coverage just like search moves).
pub fn step_towards(ctx: &mut WorldCtx<'_>, id: EntityId, target: Cell) -> BehaviorResult<()> {
    let pos = ctx.position(id)?;
    let candidate = pos.step_towards(target);
    if ctx.grid.move_to(id, candidate)? {
        ctx.visited.record(candidate);
    }
    Ok(())
}

/// The hub cell closest to `pos` by Manhattan distance.
///
/// Ties break toward the earliest hub in placement order; the hub list is
/// static, so the choice is deterministic for the whole run.  `None` only
/// for an empty hub list, which a validated configuration never produces.
pub fn nearest_hub(hubs: &[Cell], pos: Cell) -> Option<Cell> {
    hubs.iter().copied().min_by_key(|hub| hub.manhattan(pos))
}

/// A uniformly random unvisited, unblocked cell among the 8 neighbors of
/// `pos`, or `None` when every reachable neighbor has already been visited.
pub fn unexplored_adjacent(ctx: &mut WorldCtx<'_>, pos: Cell) -> Option<Cell> {
    let candidates: Vec<Cell> = ctx
        .grid
        .neighborhood(pos, 1, false)
        .into_iter()
        .filter(|&c| !ctx.visited.contains(c) && !ctx.grid.is_blocked(c))
        .collect();
    ctx.rng.choose(&candidates).copied()
}
