//! The decision entry points.

use tracing::debug_span;

use crate::core::{Base, GameState, PlayerAction};
use crate::error::{ConfigError, StateResult};
use crate::targeting::hostile_bases;

use super::config::PolicyConfig;
use super::defense::preemptive_defense;
use super::stage::{StageOutcome, TurnContext};

/// A configured decision policy.
///
/// ## Example
///
/// ```
/// use basebot::core::{Base, BaseId, GameState, PlayerAction, PlayerId, Position};
/// use basebot::policy::Bot;
///
/// let state = GameState::new(PlayerId::new(1))
///     .with_base(
///         Base::new(BaseId::new(1), PlayerId::new(1), Position::new(0, 0, 0))
///             .with_population(12)
///             .with_max_population(50),
///     )
///     .with_base(Base::new(BaseId::new(2), PlayerId::NEUTRAL, Position::new(30, 0, 0)));
///
/// let actions = Bot::default().decide(&state);
/// assert_eq!(actions, vec![PlayerAction::new(BaseId::new(1), BaseId::new(2), 5)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bot {
    config: PolicyConfig,
}

impl Bot {
    /// Create a bot with the given policy parameters.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Create a bot after checking the policy parameters.
    pub fn try_new(config: PolicyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Policy parameters.
    #[must_use]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decide this turn's actions.
    ///
    /// `state` is left untouched; budgets are tracked on a private copy of
    /// the acting player's bases. Never fails; an empty world or a player
    /// without bases yields no actions.
    #[must_use]
    pub fn decide(&self, state: &GameState) -> Vec<PlayerAction> {
        let ctx = TurnContext::new(state, &self.config);
        let _span = debug_span!("decide", player = %ctx.player_id, bases = state.bases.len()).entered();

        // Fixed before any budget changes.
        let hostiles = hostile_bases(state, ctx.player_id);

        let mut owned: Vec<Base> = state.bases_owned_by(ctx.player_id).cloned().collect();
        let mut actions = Vec::new();

        for base in &mut owned {
            for stage in &self.config.ladder {
                if stage.apply(&ctx, base, &mut actions) == StageOutcome::EndLadder {
                    break;
                }
            }
        }

        if self.config.defense_enabled {
            preemptive_defense(&ctx, &hostiles, &owned, &mut actions);
        }

        tracing::debug!(count = actions.len(), "turn decided");
        actions
    }

    /// Validate `state`, then decide.
    pub fn try_decide(&self, state: &GameState) -> StateResult<Vec<PlayerAction>> {
        state.validate()?;
        Ok(self.decide(state))
    }
}

/// Decide with the default policy.
#[must_use]
pub fn decide(state: &GameState) -> Vec<PlayerAction> {
    Bot::default().decide(state)
}

/// Validate `state`, then decide with the default policy.
pub fn try_decide(state: &GameState) -> StateResult<Vec<PlayerAction>> {
    Bot::default().try_decide(state)
}
