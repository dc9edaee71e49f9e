use super::CardMask;
use crate::scoring::Scoring;
use std::collections::{BTreeSet, HashMap};

/// A set of pairwise-disjoint candidates and the scoring weight they cover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    sets: Vec<CardMask>,
    value: u32,
}

impl Partition {
    pub fn sets(&self) -> &[CardMask] {
        &self.sets
    }

    pub fn into_sets(self) -> Vec<CardMask> {
        self.sets
    }

    /// Weight of all matched cards under the scoring used to select.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Union of the selected candidates.
    pub fn covered(&self) -> CardMask {
        self.sets.iter().fold(CardMask::empty(), |acc, s| acc.union(*s))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Higher value wins; on equal value, fewer sets wins.
    fn beats(&self, other: &Partition) -> bool {
        self.value > other.value || (self.value == other.value && self.sets.len() < other.sets.len())
    }
}

/// Choose pairwise-disjoint candidates maximizing matched weight, tie-broken
/// toward fewer sets.
///
/// This is an exact search over the conflict graph: each candidate in turn is
/// taken, the problem is solved again over the candidates disjoint from
/// everything taken so far, and the best completion is kept. The empty
/// selection is the baseline. Candidates are tried in [`CardMask`] order and the
/// first of several equally good partitions is kept.
///
/// ```
/// use rummy_rs::cards::parse_cards;
/// use rummy_rs::matcher::{enumerate_matches, select_optimal};
/// use rummy_rs::scoring::Scoring;
///
/// let candidates = enumerate_matches(parse_cards("4c 4d 4h 4s 2s 3s").unwrap());
/// let best = select_optimal(&candidates, Scoring::PointValue);
/// // 2s-3s-4s plus 4c-4d-4h covers every card
/// assert_eq!(best.len(), 2);
/// assert_eq!(best.value(), 2 + 3 + 4 * 4);
/// ```
pub fn select_optimal(candidates: &BTreeSet<CardMask>, scoring: Scoring) -> Partition {
    let weighted: Vec<(CardMask, u32)> = candidates.iter().map(|&c| (c, scoring.mask_cost(c))).collect();
    let mut solved = HashMap::new();
    best_completion(&weighted, CardMask::empty(), &mut solved)
}

/// Best partition from the candidates disjoint from `taken`. The available
/// candidates depend only on `taken`, so results are cached on it.
fn best_completion(
    candidates: &[(CardMask, u32)],
    taken: CardMask,
    solved: &mut HashMap<CardMask, Partition>,
) -> Partition {
    if let Some(hit) = solved.get(&taken) {
        return hit.clone();
    }

    let mut best = Partition::default();
    for &(candidate, weight) in candidates.iter().filter(|(c, _)| c.is_disjoint(taken)) {
        let rest = best_completion(candidates, taken.union(candidate), solved);
        let mut sets = Vec::with_capacity(rest.sets.len() + 1);
        sets.push(candidate);
        sets.extend_from_slice(&rest.sets);
        let option = Partition { sets, value: rest.value + weight };
        if option.beats(&best) {
            best = option;
        }
    }

    solved.insert(taken, best.clone());
    best
}
