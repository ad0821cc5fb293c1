//! RNG module - seeded randomness for placement
//!
//! Every engine owns one [`GameRng`]. With a fixed seed, snake spawns, initial
//! headings and fruit cells replay identically, which the headless driver and
//! the tests rely on.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Direction;

#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in an inclusive range
    pub fn range(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.random_range(range)
    }

    /// Uniformly random heading
    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}
