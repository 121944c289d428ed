//! Global preemptive defense pass.
//!
//! Runs once per turn after every ladder. Owned bases close to the
//! strongest enemy garrison send half of whatever they have left at it.
//! There is no affordability check: a drained base still emits an action,
//! possibly with zero units.

use tracing::{debug, trace};

use crate::core::{distance, Base, PlayerAction};
use crate::targeting::predict_strongest_hostile;

use super::stage::TurnContext;

/// Queue defensive strikes from `owned` bases against the strongest of
/// `hostile_bases`.
///
/// `owned` carries the working populations left over by the ladder.
pub fn preemptive_defense(
    ctx: &TurnContext<'_>,
    hostile_bases: &[&Base],
    owned: &[Base],
    out: &mut Vec<PlayerAction>,
) {
    let Some(strongest) = predict_strongest_hostile(hostile_bases) else {
        trace!("no hostile bases, skipping defense");
        return;
    };

    for base in owned {
        let range = distance(base.position, strongest.position);
        if range >= ctx.config.defense_radius {
            continue;
        }

        let amount = base.population.max(0) / 2;
        debug!(stage = "defense", src = %base.uid, dest = %strongest.uid, range, amount, "queued action");
        out.push(PlayerAction::new(base.uid, strongest.uid, amount));
    }
}
