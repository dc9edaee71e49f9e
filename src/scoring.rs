//! Leftover-score conventions.

use crate::cards::Card;
use crate::matcher::CardMask;

/// How unmatched cards are charged, and therefore what the partition selector
/// maximizes over matched cards.
///
/// The two conventions are not equivalent: under [`Scoring::PointValue`] a
/// run of court cards outweighs a longer run of low pips, under
/// [`Scoring::CardCount`] it does not.
///
/// ```
/// use rummy_rs::cards::{Card, Rank, Suit};
/// use rummy_rs::scoring::Scoring;
///
/// let king = Card::new(Rank::King, Suit::Spades);
/// assert_eq!(Scoring::PointValue.card_cost(king), 10);
/// assert_eq!(Scoring::CardCount.card_cost(king), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Scoring {
    /// Sum of [`Card::point_value`] over cards.
    #[default]
    PointValue,
    /// Every card costs one.
    CardCount,
}

impl Scoring {
    pub const fn card_cost(self, card: Card) -> u32 {
        match self {
            Scoring::PointValue => card.point_value(),
            Scoring::CardCount => 1,
        }
    }

    /// Total cost of a collection of cards.
    pub fn cost<I>(self, cards: I) -> u32
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().map(|c| self.card_cost(c)).sum()
    }

    pub(crate) fn mask_cost(self, mask: CardMask) -> u32 {
        match self {
            Scoring::PointValue => self.cost(mask),
            Scoring::CardCount => mask.len() as u32,
        }
    }
}
