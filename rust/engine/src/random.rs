//! Randomness behind a narrow, injectable interface.
//!
//! Everything non-deterministic in a hand (the shuffle and the random dealer
//! pick) draws from a [`RandomSource`], so tests can substitute a scripted
//! sequence and hosts can replay a hand from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_float(&mut self) -> f64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        let scaled = (self.next_float() * bound as f64) as usize;
        // guards against a source that returns exactly 1.0
        scaled.min(bound.saturating_sub(1))
    }
}

/// ChaCha20-backed source. Equal seeds produce equal sequences.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new_with_seed(rand::random())
    }
}

impl RandomSource for SeededRandom {
    fn next_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
