use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use crate::scoring::Scoring;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use rummy_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(usize::from(Card::COUNT));
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal a complete hand of [`HAND_SIZE`] cards. Returns `None`, leaving the
    /// deck untouched, when fewer cards remain.
    ///
    /// ```
    /// use rummy_rs::deck::Deck;
    /// use rummy_rs::scoring::Scoring;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(3);
    /// let hand = deck.deal_hand(Scoring::default()).unwrap();
    /// assert!(hand.is_complete());
    /// assert_eq!(deck.len(), 42);
    /// ```
    pub fn deal_hand(&mut self, scoring: Scoring) -> Option<Hand> {
        if self.cards.len() < HAND_SIZE {
            return None;
        }
        let mut hand = Hand::with_scoring(scoring);
        for card in self.draw_n(HAND_SIZE) {
            // cards in a deck are unique and we never exceed HAND_SIZE
            hand.add(card).ok()?;
        }
        Some(hand)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
