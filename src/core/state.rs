//! World snapshot handed to the decision engine once per turn.
//!
//! ## GameState
//!
//! - `bases`: every base in the world, in server order
//! - `game`: metadata about the acting player
//!
//! The snapshot is built by the caller and never mutated by this crate.
//! Collection order matters: it decides which owned base acts first and
//! breaks distance ties during targeting.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::base::{Base, BaseId};
use super::player::PlayerId;
use crate::error::{StateError, StateResult};

/// Per-turn game metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// The player the bot is acting for.
    pub player_id: PlayerId,
}

/// Complete world snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All bases, in server order.
    pub bases: Vec<Base>,

    /// Acting-player metadata.
    pub game: GameInfo,
}

impl GameState {
    /// Create an empty snapshot for `player_id`.
    #[must_use]
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            bases: Vec::new(),
            game: GameInfo { player_id },
        }
    }

    /// Add a base (builder pattern).
    #[must_use]
    pub fn with_base(mut self, base: Base) -> Self {
        self.bases.push(base);
        self
    }

    /// Parse a snapshot from JSON and validate it.
    pub fn from_json(json: &str) -> StateResult<Self> {
        let state: GameState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    /// The acting player.
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        self.game.player_id
    }

    /// Look up a base by uid.
    #[must_use]
    pub fn get_base(&self, uid: BaseId) -> Option<&Base> {
        self.bases.iter().find(|b| b.uid == uid)
    }

    /// Bases owned by `player`, in collection order.
    pub fn bases_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Base> {
        self.bases.iter().filter(move |b| b.is_owned_by(player))
    }

    /// Check the caller invariants: unique uids, non-negative populations
    /// and capacities.
    pub fn validate(&self) -> StateResult<()> {
        let mut seen = FxHashSet::default();
        for base in &self.bases {
            if !seen.insert(base.uid) {
                return Err(StateError::DuplicateBase(base.uid));
            }
            if base.population < 0 {
                return Err(StateError::NegativePopulation {
                    uid: base.uid,
                    population: base.population,
                });
            }
            if base.max_population < 0 {
                return Err(StateError::NegativeCapacity {
                    uid: base.uid,
                    max_population: base.max_population,
                });
            }
        }
        Ok(())
    }
}
