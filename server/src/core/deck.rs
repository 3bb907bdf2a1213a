//! Deck manager: a shuffled pile of ingredient cards
//!
//! Pure business logic with no I/O dependencies

use shared::{Card, Category, ServiceId, process_debug};

use crate::traits::RandomSource;

/// Draw pile with top-of-stack semantics (the top is the end of the vector)
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    copies_per_category: usize,
    resets: u64,
}

impl Deck {
    /// Create an empty deck; the first deal fills it
    pub fn new(copies_per_category: usize) -> Self {
        Self {
            cards: Vec::with_capacity(copies_per_category * Category::ALL.len()),
            copies_per_category,
            resets: 0,
        }
    }

    /// Create a deck that is already filled and shuffled
    pub fn shuffled<R>(copies_per_category: usize, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut deck = Self::new(copies_per_category);
        deck.reset(rng);
        deck
    }

    /// Cards in a freshly reset deck
    pub fn capacity(&self) -> usize {
        self.copies_per_category * Category::ALL.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// How many times the deck has been rebuilt
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Replace the contents with a full shuffled deck.
    ///
    /// Cards already sitting in hands are not accounted for.
    pub fn reset<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        self.cards.clear();
        for category in Category::ALL {
            self.cards
                .extend(std::iter::repeat(Card::new(category)).take(self.copies_per_category));
        }
        rng.shuffle(&mut self.cards);
        self.resets += 1;

        process_debug!(
            ServiceId::current(),
            "🃏 Deck reset #{} with {} cards",
            self.resets,
            self.cards.len()
        );
    }

    /// Pop `size` cards off the top, rebuilding the deck whenever it runs dry
    pub fn deal_hand<R>(&mut self, size: usize, rng: &mut R) -> Vec<Card>
    where
        R: RandomSource + ?Sized,
    {
        let mut hand = Vec::with_capacity(size);
        while hand.len() < size {
            if self.cards.is_empty() {
                self.reset(rng);
            }
            match self.cards.pop() {
                Some(card) => hand.push(card),
                // Only reachable with zero copies per category
                None => break,
            }
        }
        hand
    }
}
