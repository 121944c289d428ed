//! Policy tuning parameters.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::stage::Stage;
use crate::error::ConfigError;

/// Decision policy parameters.
///
/// The defaults reproduce the stock bot exactly. Fields missing from a
/// serialized config fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Per-base stages, in evaluation order.
    pub ladder: SmallVec<[Stage; 4]>,

    /// Units sent on top of the target's garrison when attacking (default: 1).
    pub attack_margin: i64,

    /// Units committed to claim an unclaimed base (default: 5).
    /// Also the minimum garrison needed before expanding.
    pub expand_units: i64,

    /// Reinforce only while population is strictly above this percentage
    /// of capacity (default: 80).
    pub reinforce_threshold_percent: i64,

    /// Owned bases strictly closer than this to the strongest enemy
    /// garrison commit half their units to it (default: 10).
    pub defense_radius: u64,

    /// Run the global preemptive defense pass (default: true).
    pub defense_enabled: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            ladder: smallvec![Stage::Upgrade, Stage::Attack, Stage::Expand, Stage::Reinforce],
            attack_margin: 1,
            expand_units: 5,
            reinforce_threshold_percent: 80,
            defense_radius: 10,
            defense_enabled: true,
        }
    }
}

impl PolicyConfig {
    /// Parse a (possibly partial) config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PolicyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that would queue empty or negative commitments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expand_units <= 0 {
            return Err(ConfigError::NonPositiveExpandUnits(self.expand_units));
        }
        if self.attack_margin < 0 {
            return Err(ConfigError::NegativeAttackMargin(self.attack_margin));
        }
        if self.reinforce_threshold_percent < 0 {
            return Err(ConfigError::NegativeReinforceThreshold(self.reinforce_threshold_percent));
        }
        Ok(())
    }

    /// Replace the per-base ladder.
    pub fn with_ladder(mut self, ladder: impl IntoIterator<Item = Stage>) -> Self {
        self.ladder = ladder.into_iter().collect();
        self
    }

    /// Set the attack margin.
    pub fn with_attack_margin(mut self, margin: i64) -> Self {
        self.attack_margin = margin;
        self
    }

    /// Set the expansion commitment.
    pub fn with_expand_units(mut self, units: i64) -> Self {
        self.expand_units = units;
        self
    }

    /// Set the reinforcement threshold percentage.
    pub fn with_reinforce_threshold(mut self, percent: i64) -> Self {
        self.reinforce_threshold_percent = percent;
        self
    }

    /// Set the defense radius.
    pub fn with_defense_radius(mut self, radius: u64) -> Self {
        self.defense_radius = radius;
        self
    }

    /// Disable the preemptive defense pass.
    pub fn without_defense(mut self) -> Self {
        self.defense_enabled = false;
        self
    }
}
