use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck with a seeded shuffle, so a seed always deals the same hand.
///
/// # Examples
///
/// ```
/// use potsettle_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.deal_card(), b.deal_card());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Cards stay in suit/rank order until [`Deck::shuffle`] is called.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(card)
    }

    pub fn deal_n<const N: usize>(&mut self) -> Option<[Card; N]> {
        let mut out = [self.cards.first().copied()?; N];
        for slot in out.iter_mut() {
            *slot = self.deal_card()?;
        }
        Some(out)
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Draws a value in `0..bound` from the deck's RNG stream.
    pub fn pick(&mut self, bound: usize) -> usize {
        use rand::Rng;
        self.rng.random_range(0..bound)
    }
}
