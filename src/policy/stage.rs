//! Per-base decision stages.
//!
//! Each owned base walks the configured ladder once per turn. A stage
//! looks at the base's working population, may queue one action, and
//! deducts what it spent so later stages see the reduced budget.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Base, GameState, PlayerAction, PlayerId};
use crate::targeting::{find_targets, TargetCategory};

use super::config::PolicyConfig;

/// Read-only inputs shared by every stage within one turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// The unmodified snapshot. Targets are always resolved against it.
    pub state: &'a GameState,
    /// The acting player.
    pub player_id: PlayerId,
    /// Policy parameters.
    pub config: &'a PolicyConfig,
}

impl<'a> TurnContext<'a> {
    pub fn new(state: &'a GameState, config: &'a PolicyConfig) -> Self {
        Self {
            state,
            player_id: state.player_id(),
            config,
        }
    }
}

/// What the ladder does after a stage ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// Move on to the next stage.
    Continue,
    /// Skip the rest of the ladder for this base.
    EndLadder,
}

/// A rung of the per-base decision ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Spend the pending upgrade cost on the base itself.
    Upgrade,
    /// Overwhelm the nearest affordable hostile base.
    Attack,
    /// Claim the nearest unclaimed base.
    Expand,
    /// Push surplus to the nearest friendly base.
    Reinforce,
}

impl Stage {
    /// Stage name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Upgrade => "upgrade",
            Stage::Attack => "attack",
            Stage::Expand => "expand",
            Stage::Reinforce => "reinforce",
        }
    }

    /// Run this stage for `base`, which holds the working population.
    pub fn apply(self, ctx: &TurnContext<'_>, base: &mut Base, out: &mut Vec<PlayerAction>) -> StageOutcome {
        match self {
            Stage::Upgrade => upgrade(base, out),
            Stage::Attack => attack(ctx, base, out),
            Stage::Expand => expand(ctx, base, out),
            Stage::Reinforce => reinforce(ctx, base, out),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Queue `amount` units from `base` to `dest` and deduct them.
///
/// Callers check `0 < amount <= base.population` first.
fn commit(stage: Stage, base: &mut Base, dest: &Base, amount: i64, out: &mut Vec<PlayerAction>) {
    debug!(stage = stage.name(), src = %base.uid, dest = %dest.uid, amount, "queued action");
    out.push(PlayerAction::new(base.uid, dest.uid, amount));
    base.population -= amount;
}

fn upgrade(base: &mut Base, out: &mut Vec<PlayerAction>) -> StageOutcome {
    if !base.can_upgrade() {
        trace!(base = %base.uid, "no affordable upgrade");
        return StageOutcome::Continue;
    }

    let cost = base.units_until_upgrade;
    debug!(stage = "upgrade", src = %base.uid, amount = cost, "queued action");
    out.push(PlayerAction::new(base.uid, base.uid, cost));
    base.population -= cost;
    StageOutcome::EndLadder
}

fn attack(ctx: &TurnContext<'_>, base: &mut Base, out: &mut Vec<PlayerAction>) -> StageOutcome {
    let targets = find_targets(ctx.state, ctx.player_id, base, TargetCategory::Hostile);

    let affordable = targets.into_iter().find_map(|target| {
        let required = target.population.saturating_add(ctx.config.attack_margin);
        (required > 0 && base.population >= required).then_some((target, required))
    });

    match affordable {
        Some((target, required)) => commit(Stage::Attack, base, target, required, out),
        None => trace!(base = %base.uid, "no affordable hostile target"),
    }
    StageOutcome::Continue
}

fn expand(ctx: &TurnContext<'_>, base: &mut Base, out: &mut Vec<PlayerAction>) -> StageOutcome {
    let units = ctx.config.expand_units;
    let targets = find_targets(ctx.state, ctx.player_id, base, TargetCategory::Unclaimed);

    match targets.first() {
        Some(nearest) if units > 0 && base.population >= units => commit(Stage::Expand, base, nearest, units, out),
        Some(_) => trace!(base = %base.uid, population = base.population, "too weak to expand"),
        None => trace!(base = %base.uid, "nothing left to claim"),
    }
    StageOutcome::Continue
}

fn reinforce(ctx: &TurnContext<'_>, base: &mut Base, out: &mut Vec<PlayerAction>) -> StageOutcome {
    let population = i128::from(base.population);
    let threshold = i128::from(base.max_population) * i128::from(ctx.config.reinforce_threshold_percent);
    if population * 100 <= threshold {
        return StageOutcome::Continue;
    }

    let targets = find_targets(ctx.state, ctx.player_id, base, TargetCategory::Friendly);
    let Some(nearest) = targets.first() else {
        trace!(base = %base.uid, "no friendly base to reinforce");
        return StageOutcome::Continue;
    };

    // Measured against full capacity, not the threshold above: bases between
    // the threshold and capacity trigger the stage but transfer nothing.
    let transfer = base.population.saturating_sub(base.max_population) / 2;
    if transfer > base.population {
        // Only reachable with a negative capacity.
        trace!(base = %base.uid, transfer, "transfer exceeds garrison");
    } else if transfer > 0 {
        commit(Stage::Reinforce, base, nearest, transfer, out);
    }
    StageOutcome::Continue
}
