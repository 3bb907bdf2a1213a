//! Random source backed by the `rand` crate

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared::Card;

use crate::traits::RandomSource;

/// Real random source implementation
pub struct RealRandomSource {
    rng: StdRng,
}

impl RealRandomSource {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Deterministic source; equal seeds produce equal deals and menus
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for RealRandomSource {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}
