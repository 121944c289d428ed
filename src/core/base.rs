//! Bases: the territorial units players fight over.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// Unique identifier of a base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseId(pub u32);

impl BaseId {
    /// Create a new base ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Base({})", self.0)
    }
}

/// A base in the world snapshot.
///
/// Counters are `i64`. `population` is never negative in a valid
/// snapshot (see [`GameState::validate`](super::GameState::validate)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    /// Unique identifier.
    pub uid: BaseId,

    /// Owner. `PlayerId::NEUTRAL` for unclaimed bases.
    pub player: PlayerId,

    /// Location in the world.
    pub position: Position,

    /// Units currently stationed here.
    pub population: i64,

    /// Capacity of the base.
    pub max_population: i64,

    /// Units still needed to trigger the next upgrade.
    /// Zero or negative means no upgrade is pending.
    pub units_until_upgrade: i64,
}

impl Base {
    /// Create a base with no pending upgrade.
    #[must_use]
    pub fn new(uid: BaseId, player: PlayerId, position: Position) -> Self {
        Self {
            uid,
            player,
            position,
            population: 0,
            max_population: 0,
            units_until_upgrade: 0,
        }
    }

    /// Set the population (builder pattern).
    #[must_use]
    pub fn with_population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    /// Set the capacity (builder pattern).
    #[must_use]
    pub fn with_max_population(mut self, max_population: i64) -> Self {
        self.max_population = max_population;
        self
    }

    /// Set the units needed for the next upgrade (builder pattern).
    #[must_use]
    pub fn with_units_until_upgrade(mut self, units: i64) -> Self {
        self.units_until_upgrade = units;
        self
    }

    /// Whether this base belongs to `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.player == player
    }

    /// Whether this base is unclaimed.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.player.is_neutral()
    }

    /// Whether an upgrade is pending and affordable right now.
    #[must_use]
    pub fn can_upgrade(&self) -> bool {
        self.units_until_upgrade > 0 && self.population >= self.units_until_upgrade
    }
}
