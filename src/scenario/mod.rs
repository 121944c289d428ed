//! Synthetic world snapshots for benchmarks and property tests.
//!
//! ```
//! use basebot::scenario::ScenarioBuilder;
//!
//! let state = ScenarioBuilder::new().base_count(8).player_count(3).build(42);
//! assert_eq!(state.bases.len(), 8);
//! ```

mod builder;
mod rng;

pub use builder::ScenarioBuilder;
pub use rng::WorldRng;
