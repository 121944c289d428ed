//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Id `0` is reserved for unclaimed
//! territory; every other value is an ordinary player.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// `PlayerId::NEUTRAL` (`0`) owns every unclaimed base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Owner of unclaimed bases.
    pub const NEUTRAL: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this id denotes unclaimed territory.
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        self.0 == 0
    }

    /// Whether a base owned by `owner` is hostile from this player's view.
    ///
    /// ```
    /// use basebot::core::PlayerId;
    ///
    /// let me = PlayerId::new(1);
    /// assert!(me.is_hostile(PlayerId::new(2)));
    /// assert!(!me.is_hostile(PlayerId::NEUTRAL));
    /// assert!(!me.is_hostile(me));
    /// ```
    #[must_use]
    pub const fn is_hostile(self, owner: PlayerId) -> bool {
        owner.0 != self.0 && !owner.is_neutral()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_neutral() {
            write!(f, "Neutral")
        } else {
            write!(f, "Player {}", self.0)
        }
    }
}
