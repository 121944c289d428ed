//! Seeded randomness for synthetic worlds.
//!
//! Each base draws from its own forked stream, so adding fields to one
//! base's generation never shifts the values drawn for the others.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream with deterministic forking.
#[derive(Clone, Debug)]
pub struct WorldRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl WorldRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Independent stream derived from this seed and the fork count.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed ^ self.forks.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Uniform integer in `range`, both ends included.
    pub fn gen_inclusive(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability, clamped into `0.0..=1.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}
