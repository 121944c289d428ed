//! Target search.
//!
//! Targets are filtered by relative ownership and ranked nearest first.
//! The sort is stable, so bases at equal distance keep their snapshot
//! order.

use serde::{Deserialize, Serialize};

use crate::core::{distance, Base, GameState, PlayerId};

/// Relative-ownership category of a candidate base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCategory {
    /// Owned by another, non-neutral player.
    Hostile,
    /// Owned by nobody.
    Unclaimed,
    /// Owned by the acting player (the origin base itself excluded).
    Friendly,
}

impl TargetCategory {
    /// Whether `candidate` falls in this category for `player_id`,
    /// searching from `origin`.
    #[must_use]
    pub fn matches(self, player_id: PlayerId, origin: &Base, candidate: &Base) -> bool {
        match self {
            TargetCategory::Hostile => player_id.is_hostile(candidate.player),
            TargetCategory::Unclaimed => candidate.is_neutral(),
            TargetCategory::Friendly => {
                candidate.is_owned_by(player_id) && candidate.uid != origin.uid
            }
        }
    }
}

/// Bases in `category` relative to `origin`, nearest first.
///
/// Returns an empty vector when nothing matches.
#[must_use]
pub fn find_targets<'a>(
    state: &'a GameState,
    player_id: PlayerId,
    origin: &Base,
    category: TargetCategory,
) -> Vec<&'a Base> {
    let mut targets: Vec<&Base> = state
        .bases
        .iter()
        .filter(|candidate| category.matches(player_id, origin, candidate))
        .collect();

    // sort_by_key is stable
    targets.sort_by_key(|target| distance(origin.position, target.position));
    targets
}

/// Every hostile base, in snapshot order.
#[must_use]
pub fn hostile_bases(state: &GameState, player_id: PlayerId) -> Vec<&Base> {
    state
        .bases
        .iter()
        .filter(|b| player_id.is_hostile(b.player))
        .collect()
}
