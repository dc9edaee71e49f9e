use super::validator::match_in;
use super::{CardMask, MIN_MATCHED_SIZE};
use crate::cards::Card;
use std::collections::{BTreeSet, HashMap};

/// Every distinct subset of `cards` that is a valid run or group.
///
/// Search is by recursive elimination: drop one card, enumerate the matches of
/// what remains, then keep each of those and also try it with the dropped card
/// put back. Pools of at most [`MIN_MATCHED_SIZE`] cards are tested whole.
/// Sub-pools recur along many elimination orders, so their results are cached
/// by mask; the cache only saves work, the candidate set is the same.
///
/// ```
/// use rummy_rs::cards::parse_cards;
/// use rummy_rs::matcher::enumerate_matches;
///
/// let found = enumerate_matches(parse_cards("5h 6h 7h 8h Kc").unwrap());
/// // 5-6-7, 6-7-8, 5-6-7-8
/// assert_eq!(found.len(), 3);
/// ```
pub fn enumerate_matches<I>(cards: I) -> BTreeSet<CardMask>
where
    I: IntoIterator<Item = Card>,
{
    let pool: CardMask = cards.into_iter().collect();
    let mut seen = HashMap::new();
    let found = eliminate(pool, &mut seen);
    log::trace!("{} candidate matches among {} cards", found.len(), pool.len());
    found
}

fn eliminate(pool: CardMask, seen: &mut HashMap<CardMask, BTreeSet<CardMask>>) -> BTreeSet<CardMask> {
    if let Some(hit) = seen.get(&pool) {
        return hit.clone();
    }

    let mut found = BTreeSet::new();
    if pool.len() > MIN_MATCHED_SIZE {
        for card in pool {
            for sub in eliminate(pool.without(card), seen) {
                if match_in(sub) {
                    found.insert(sub);
                }
                let grown = sub.with(card);
                if match_in(grown) {
                    found.insert(grown);
                }
            }
        }
    } else if match_in(pool) {
        found.insert(pool);
    }

    seen.insert(pool, found.clone());
    found
}
