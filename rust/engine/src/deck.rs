use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, full_deck};
use crate::errors::GameError;

pub const DECK_SIZE: usize = 52;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Unshuffled deck whose later shuffles draw from a random seed.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep suit-major order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Permutes the undrawn cards. Drawn cards stay out until [`Deck::reset`].
    pub fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        Ok(card)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
