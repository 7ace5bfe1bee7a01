//! Victim health decay.

use sar_core::EntityId;

use crate::{BehaviorResult, WorldCtx};

/// One victim activation: lose the configured decay amount, floored at 0.
///
/// Rescued victims stop decaying permanently; a victim already at 0 stays
/// there (and, being unsensable, can never be rescued).
pub fn victim_step(ctx: &mut WorldCtx<'_>, id: EntityId) -> BehaviorResult<()> {
    let decay = ctx.config.victim_decay_per_tick;
    let victim = ctx.victim_mut(id)?;
    if !victim.rescued && victim.health > 0 {
        victim.health = victim.health.saturating_sub(decay);
    }
    Ok(())
}
