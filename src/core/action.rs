//! Actions emitted by the decision engine.
//!
//! Every action is a unit transfer from one base to another. What the
//! transfer means is decided by the game server, not by this crate:
//! - source == destination: upgrade the base
//! - destination hostile or unclaimed: attack / expand
//! - destination friendly: reinforce

use serde::{Deserialize, Serialize};

use super::base::BaseId;

/// A command submitted for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAction {
    /// Base the units leave from.
    pub src: BaseId,

    /// Base the units are sent to.
    pub dest: BaseId,

    /// Number of units committed.
    pub amount: i64,
}

impl PlayerAction {
    /// Create a new action.
    #[must_use]
    pub const fn new(src: BaseId, dest: BaseId, amount: i64) -> Self {
        Self { src, dest, amount }
    }

    /// Whether this action spends units on the source base itself.
    #[must_use]
    pub fn is_upgrade(&self) -> bool {
        self.src == self.dest
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} x{}", self.src, self.dest, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_new() {
        let action = PlayerAction::new(BaseId::new(1), BaseId::new(2), 6);

        assert_eq!(action.src, BaseId::new(1));
        assert_eq!(action.dest, BaseId::new(2));
        assert_eq!(action.amount, 6);
        assert!(!action.is_upgrade());
        assert_eq!(action.to_string(), "Base(1) -> Base(2) x6");
    }

    #[test]
    fn test_upgrade_action() {
        let action = PlayerAction::new(BaseId::new(3), BaseId::new(3), 4);
        assert!(action.is_upgrade());
    }

    #[test]
    fn test_action_serialization() {
        let action = PlayerAction::new(BaseId::new(1), BaseId::new(9), 5);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"src":1,"dest":9,"amount":5}"#);

        let deserialized: PlayerAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
