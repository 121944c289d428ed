//! Turn decision policy.
//!
//! For each owned base, in snapshot order, the configured ladder runs:
//!
//! 1. **Upgrade** - pay a pending upgrade; ends the ladder for that base
//! 2. **Attack** - hit the nearest hostile base the garrison can overwhelm
//! 3. **Expand** - claim the nearest unclaimed base
//! 4. **Reinforce** - push surplus above capacity to the nearest ally
//!
//! Stages spend from a per-call working copy of populations, so each sees
//! what earlier stages left. After every ladder has run, a single
//! preemptive defense pass targets the strongest enemy garrison.

mod bot;
mod config;
mod defense;
mod stage;

pub use bot::{decide, try_decide, Bot};
pub use config::PolicyConfig;
pub use defense::preemptive_defense;
pub use stage::{Stage, StageOutcome, TurnContext};
