//! Core engine types: players, bases, positions, snapshots, actions.
//!
//! Everything here is plain data plus the distance metric. The decision
//! logic lives in `targeting` and `policy`.

pub mod action;
pub mod base;
pub mod player;
pub mod position;
pub mod state;

pub use action::PlayerAction;
pub use base::{Base, BaseId};
pub use player::PlayerId;
pub use position::{distance, Position};
pub use state::{GameInfo, GameState};
