//! Injected random-number capability
//!
//! Move sources and the game driver consume randomness through the
//! [`RandomIndex`] trait so they stay deterministic and testable when given
//! a seeded or scripted source.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

/// Uniform integer sampling within inclusive bounds
pub trait RandomIndex {
    /// Return a uniformly distributed integer in `[min, max]`
    fn int_in_range(&mut self, min: usize, max: usize) -> usize;
}

/// Standard random source backed by `StdRng`
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Create a random source with a fresh seed
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random source with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomIndex for StdRandom {
    fn int_in_range(&mut self, min: usize, max: usize) -> usize {
        self.rng.random_range(min..=max)
    }
}
