//! Target selection for the decision engine.
//!
//! - `TargetCategory`: closed set of relative-ownership categories
//! - `find_targets`: matching bases, nearest first
//! - `predict_strongest_hostile`: the enemy base most likely to attack

mod prediction;
mod search;

pub use prediction::predict_strongest_hostile;
pub use search::{find_targets, hostile_bases, TargetCategory};
