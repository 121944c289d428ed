//! Errors raised at the input boundary.
//!
//! The decision pass itself never fails. These errors only come from
//! validating or parsing a snapshot or a policy config before a turn.

use thiserror::Error;

use crate::core::BaseId;

/// A snapshot that breaks a caller invariant.
#[derive(Debug, Error)]
pub enum StateError {
    /// Two bases share a uid, so targets cannot be resolved.
    #[error("duplicate base uid: {0}")]
    DuplicateBase(BaseId),

    /// A base reports fewer than zero units.
    #[error("{uid} has negative population {population}")]
    NegativePopulation { uid: BaseId, population: i64 },

    /// A base reports a capacity below zero.
    #[error("{uid} has negative capacity {max_population}")]
    NegativeCapacity { uid: BaseId, max_population: i64 },

    /// The snapshot could not be parsed.
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for snapshot validation and parsing.
pub type StateResult<T> = Result<T, StateError>;

/// Policy parameters that would emit empty or negative commitments.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Expansion must commit at least one unit.
    #[error("expand_units must be positive, got {0}")]
    NonPositiveExpandUnits(i64),

    /// Attacks must send at least the target's garrison.
    #[error("attack_margin must be non-negative, got {0}")]
    NegativeAttackMargin(i64),

    /// The reinforcement threshold is a percentage of capacity.
    #[error("reinforce_threshold_percent must be non-negative, got {0}")]
    NegativeReinforceThreshold(i64),

    /// The config could not be parsed.
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}
