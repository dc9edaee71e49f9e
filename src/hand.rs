use crate::cards::{parse_cards, Card};
use crate::matched::{MatchError, MatchKind, MatchedSet};
use crate::matcher::{enumerate_matches, select_optimal, CardMask};
use crate::scoring::Scoring;
use std::fmt;
use std::str::FromStr;

/// Most cards a hand may hold.
pub const HAND_SIZE: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("the hand already contains {0}")]
    DuplicateCard(Card),
    #[error("the hand is complete; no more cards may be added")]
    HandFull,
    #[error("invalid match: {0}")]
    InvalidMatch(#[from] MatchError),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A Rummy hand of at most [`HAND_SIZE`] distinct cards, some of which are
/// organized into disjoint matched sets.
///
/// Unmatched cards are always derived from the cards and the matched sets.
///
/// ```
/// use rummy_rs::hand::Hand;
///
/// let mut hand: Hand = "As 2s 3s 4s 4d 4c 2h 3h 4h 2d".parse().unwrap();
/// hand.auto_match();
/// assert_eq!(hand.matched_sets().len(), 3);
/// assert_eq!(hand.unmatched_cards().len(), 1);
/// assert_eq!(hand.score(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: CardMask,
    matched: Vec<MatchedSet>,
    scoring: Scoring,
}

impl Hand {
    /// An empty hand scored by card points.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(scoring: Scoring) -> Self {
        Self { scoring, ..Self::default() }
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Add an unmatched card.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.contains(card) {
            return Err(HandError::DuplicateCard(card));
        }
        if self.is_complete() {
            return Err(HandError::HandFull);
        }
        self.cards.insert(card);
        Ok(())
    }

    /// Remove `card` and dissolve the matched set holding it, if any. The
    /// set's other cards become unmatched. Absent cards are ignored.
    pub fn remove(&mut self, card: Card) {
        if self.cards.remove(card) {
            self.matched.retain(|set| !set.contains(card));
        }
    }

    /// Drop every card and every matched set.
    pub fn clear(&mut self) {
        self.cards = CardMask::empty();
        self.matched.clear();
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(card)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.size() >= HAND_SIZE
    }

    /// All cards, sorted.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.to_vec()
    }

    /// A copy of the current matched sets.
    pub fn matched_sets(&self) -> Vec<MatchedSet> {
        self.matched.clone()
    }

    /// Cards in no matched set, sorted.
    pub fn unmatched_cards(&self) -> Vec<Card> {
        self.unmatched().to_vec()
    }

    /// Leftover score: the cost of the unmatched cards under this hand's
    /// [`Scoring`].
    pub fn score(&self) -> u32 {
        self.scoring.mask_cost(self.unmatched())
    }

    /// Register `cards` as a group. Every card must be in the hand and unmatched.
    pub fn create_group(&mut self, cards: &[Card]) -> Result<(), HandError> {
        self.create(cards, MatchKind::Group)
    }

    /// Register `cards` as a run. Every card must be in the hand and unmatched.
    pub fn create_run(&mut self, cards: &[Card]) -> Result<(), HandError> {
        self.create(cards, MatchKind::Run)
    }

    /// Replace all matched sets with an optimal partition of the hand's cards.
    ///
    /// Existing matched sets are ignored; the partition is computed from the
    /// raw cards and swapped in as a whole.
    pub fn auto_match(&mut self) {
        let candidates = enumerate_matches(self.cards);
        let best = select_optimal(&candidates, self.scoring);
        let matched: Vec<MatchedSet> = best.sets().iter().map(|&c| MatchedSet::from_candidate(c)).collect();
        log::debug!(
            "auto-match: {} candidates, {} sets covering {}, leftover {}",
            candidates.len(),
            matched.len(),
            best.covered(),
            self.cards.difference(best.covered())
        );
        self.matched = matched;
    }

    fn create(&mut self, cards: &[Card], kind: MatchKind) -> Result<(), HandError> {
        let unmatched = self.unmatched();
        for &card in cards {
            if !self.contains(card) {
                return Err(MatchError::NotInHand(card).into());
            }
            if !unmatched.contains(card) {
                return Err(MatchError::AlreadyMatched(card).into());
            }
        }
        let set = MatchedSet::try_new(cards, kind)?;
        self.matched.push(set);
        Ok(())
    }

    fn unmatched(&self) -> CardMask {
        self.matched.iter().fold(self.cards, |rest, set| rest.difference(set.mask()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.matched {
            write!(f, "{set} ")?;
        }
        write!(f, "unmatched{}", self.unmatched())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        let mut hand = Hand::new();
        for card in cards {
            hand.add(card)?;
        }
        Ok(hand)
    }
}
