//! Service trait definitions for dependency injection
//!
//! Randomness is abstracted behind these traits so tests can pin deals and menus

use shared::Card;

/// Source of randomness for shuffling the deck and picking menu tiers
#[mockall::automock]
pub trait RandomSource: Send {
    /// Uniformly pick an index in `0..upper`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;

    /// Apply a uniform random permutation to `cards`
    fn shuffle(&mut self, cards: &mut [Card]);
}
