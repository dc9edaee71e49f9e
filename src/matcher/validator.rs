use super::{CardMask, MIN_MATCHED_SIZE};
use crate::cards::{Card, Suit};

/// `true` if `cards` forms a group: at least [`MIN_MATCHED_SIZE`] distinct
/// cards sharing one rank.
///
/// ```
/// use rummy_rs::cards::parse_cards;
/// use rummy_rs::matcher::group_exists;
///
/// assert!(group_exists(&parse_cards("7c 7h 7s").unwrap()));
/// assert!(!group_exists(&parse_cards("7c 7h 8s").unwrap()));
/// ```
pub fn group_exists(cards: &[Card]) -> bool {
    distinct(cards).is_some_and(group_in)
}

/// `true` if `cards` forms a run: at least [`MIN_MATCHED_SIZE`] distinct
/// cards of one suit with consecutive ranks. Ace is low only.
///
/// ```
/// use rummy_rs::cards::parse_cards;
/// use rummy_rs::matcher::run_exists;
///
/// assert!(run_exists(&parse_cards("5d 3d 4d").unwrap()));
/// assert!(!run_exists(&parse_cards("Qd Kd Ad").unwrap()));
/// ```
pub fn run_exists(cards: &[Card]) -> bool {
    distinct(cards).is_some_and(run_in)
}

/// Mask form of [`group_exists`].
pub fn group_in(cards: CardMask) -> bool {
    if cards.len() < MIN_MATCHED_SIZE {
        return false;
    }
    let mut iter = cards.iter();
    let Some(first) = iter.next() else {
        return false;
    };
    iter.all(|c| c.rank() == first.rank())
}

/// Mask form of [`run_exists`].
///
/// Consecutiveness is decided without sorting. With `n` distinct ranks whose
/// lowest 0-based ordinal is `low`, the 1-based ranks sum to at least
/// `T(low + n) - T(low)`, with equality exactly when they are
/// `low + 1 ..= low + n`.
pub fn run_in(cards: CardMask) -> bool {
    let n = cards.len();
    if n < MIN_MATCHED_SIZE {
        return false;
    }

    let mut suit: Option<Suit> = None;
    let mut lowest = u32::MAX;
    let mut rank_sum = 0u32;
    for card in cards {
        match suit {
            None => suit = Some(card.suit()),
            Some(s) if s != card.suit() => return false,
            Some(_) => {}
        }
        let rank = u32::from(card.rank().value());
        lowest = lowest.min(rank);
        rank_sum += rank;
    }

    // one suit and unique cards, so the ranks are distinct
    let low = lowest - 1;
    let high = low + n as u32;
    rank_sum == triangular(high) - triangular(low)
}

/// Either a run or a group.
pub fn match_in(cards: CardMask) -> bool {
    run_in(cards) || group_in(cards)
}

const fn triangular(k: u32) -> u32 {
    k * (k + 1) / 2
}

/// The slice as a mask, or `None` if it repeats a card.
fn distinct(cards: &[Card]) -> Option<CardMask> {
    let mask: CardMask = cards.iter().collect();
    (mask.len() == cards.len()).then_some(mask)
}
