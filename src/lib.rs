//! # basebot
//!
//! A deterministic decision engine for a territory-control bot.
//!
//! Given a snapshot of the world (every base, its owner, position,
//! garrison, capacity and upgrade cost), the engine returns the actions
//! the bot submits this turn.
//!
//! ## Design Principles
//!
//! 1. **Pure**: the snapshot is taken by shared reference and never
//!    modified. Per-turn budgets live on a private working copy.
//!
//! 2. **Deterministic**: identical snapshots yield identical actions.
//!    Distances are exact integers, and every sort is stable.
//!
//! 3. **Closed categories**: target kinds and ladder stages are enums, so
//!    there is no unrecognized-category case to handle at runtime.
//!
//! ## Modules
//!
//! - `core`: players, bases, positions, snapshots, actions, distance
//! - `targeting`: nearest-first target search and threat prediction
//! - `policy`: the per-base ladder, the defense pass, and `decide`
//! - `scenario`: seeded synthetic worlds for benches and tests
//! - `error`: snapshot validation errors
//!
//! ## Example
//!
//! ```
//! use basebot::{decide, GameState};
//!
//! let json = r#"{
//!     "bases": [
//!         {"uid": 1, "player": 1, "position": {"x": 0, "y": 0, "z": 0},
//!          "population": 10, "max_population": 40, "units_until_upgrade": 4}
//!     ],
//!     "game": {"player_id": 1}
//! }"#;
//! let state = GameState::from_json(json).unwrap();
//! let actions = decide(&state);
//!
//! assert_eq!(actions.len(), 1);
//! assert!(actions[0].is_upgrade());
//! ```

pub mod core;
pub mod error;
pub mod policy;
pub mod scenario;
pub mod targeting;

// Re-export commonly used types
pub use crate::core::{distance, Base, BaseId, GameInfo, GameState, PlayerAction, PlayerId, Position};

pub use crate::error::{ConfigError, StateError, StateResult};

pub use crate::policy::{decide, try_decide, Bot, PolicyConfig, Stage};

pub use crate::targeting::{find_targets, predict_strongest_hostile, TargetCategory};

pub use crate::scenario::ScenarioBuilder;
