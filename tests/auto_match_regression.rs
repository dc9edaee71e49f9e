use proptest::prelude::*;
use rummy_rs::cards::{parse_cards, Card, Rank, Suit};
use rummy_rs::hand::{Hand, HAND_SIZE};
use rummy_rs::matched::MatchKind;
use rummy_rs::matcher::{enumerate_matches, select_optimal};
use rummy_rs::scoring::Scoring;

const FIXTURE: &str = "As 2s 3s 4s 4d 4c 2h 3h 4h 2d";

/// Sorting-based match check, independent of the library's validator.
fn naive_is_match(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let same_rank = cards.iter().all(|c| c.rank() == cards[0].rank());
    let same_suit = cards.iter().all(|c| c.suit() == cards[0].suit());
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
    values.sort_unstable();
    same_rank || (same_suit && values.windows(2).all(|w| w[1] == w[0] + 1))
}

/// Every valid subset of `cards`, as bit patterns over the slice.
fn naive_matches(cards: &[Card]) -> Vec<u32> {
    (0u32..(1 << cards.len()))
        .filter(|bits| {
            let subset: Vec<Card> = (0..cards.len()).filter(|&i| *bits & (1u32 << i) != 0).map(|i| cards[i]).collect();
            naive_is_match(&subset)
        })
        .collect()
}

/// Lowest leftover cost over every disjoint selection of valid subsets.
fn naive_min_leftover(cards: &[Card], scoring: Scoring) -> u32 {
    fn go(cards: &[Card], matches: &[u32], uncovered: u32, scoring: Scoring) -> u32 {
        if uncovered == 0 {
            return 0;
        }
        let i = uncovered.trailing_zeros() as usize;
        // either card i stays unmatched ...
        let mut best = scoring.card_cost(cards[i]) + go(cards, matches, uncovered & !(1u32 << i), scoring);
        // ... or it is covered by a match made of still-uncovered cards
        for &m in matches {
            if m & (1u32 << i) != 0 && m & !uncovered == 0 {
                best = best.min(go(cards, matches, uncovered & !m, scoring));
            }
        }
        best
    }
    let matches = naive_matches(cards);
    go(cards, &matches, (1u32 << cards.len()) - 1, scoring)
}

fn fixture_hand(scoring: Scoring) -> Hand {
    let mut hand = Hand::with_scoring(scoring);
    for card in parse_cards(FIXTURE).unwrap() {
        hand.add(card).unwrap();
    }
    hand
}

#[test]
fn fixture_candidate_count_is_stable() {
    let cards = parse_cards(FIXTURE).unwrap();
    assert_eq!(enumerate_matches(cards.iter().copied()).len(), 10);
    assert_eq!(naive_matches(&cards).len(), 10);
    // same answer regardless of input order
    let mut reversed = cards.clone();
    reversed.reverse();
    assert_eq!(enumerate_matches(reversed), enumerate_matches(cards));
}

#[test]
fn fixture_auto_match_by_points() {
    let mut hand = fixture_hand(Scoring::PointValue);
    assert_eq!(hand.score(), 29);
    hand.auto_match();

    assert_eq!(hand.score(), 2);
    assert_eq!(hand.score(), naive_min_leftover(&hand.cards(), Scoring::PointValue));
    assert_eq!(hand.unmatched_cards(), parse_cards("2d").unwrap());

    let mut sets: Vec<(MatchKind, Vec<Card>)> = hand.matched_sets().iter().map(|s| (s.kind(), s.cards())).collect();
    sets.sort();
    assert_eq!(
        sets,
        vec![
            (MatchKind::Run, parse_cards("2h 3h 4h").unwrap()),
            (MatchKind::Run, parse_cards("As 2s 3s").unwrap()),
            (MatchKind::Group, parse_cards("4c 4d 4s").unwrap()),
        ]
    );
}

#[test]
fn fixture_auto_match_by_count() {
    let mut hand = fixture_hand(Scoring::CardCount);
    hand.auto_match();
    assert_eq!(hand.score(), 1);
    assert_eq!(hand.score(), naive_min_leftover(&hand.cards(), Scoring::CardCount));
    assert_eq!(hand.matched_sets().len(), 3);
}

#[test]
fn auto_match_is_repeatable() {
    let mut a = fixture_hand(Scoring::PointValue);
    let mut b = a.clone();
    a.auto_match();
    b.auto_match();
    b.auto_match();
    assert_eq!(a.matched_sets(), b.matched_sets());
}

#[test]
fn court_cards_are_preferred_over_pips_by_points() {
    let mut hand: Hand = "Tc Td Th Kc Kd Kh 8h 9h Jh Qh".parse().unwrap();
    hand.auto_match();
    // two sets covering 60 points beat the 8h..Kh run covering 57
    assert_eq!(hand.score(), 37);
    assert_eq!(hand.matched_sets().len(), 2);
}

fn any_card() -> impl Strategy<Value = Card> {
    (1u8..=13u8, 0usize..4).prop_map(|(v, s)| Card::new(Rank::from_value(v).unwrap(), Suit::ALL[s]))
}

// clustered ranks give the solver overlapping candidates to choose between
fn clustered_card() -> impl Strategy<Value = Card> {
    (3u8..=8u8, 0usize..4).prop_map(|(v, s)| Card::new(Rank::from_value(v).unwrap(), Suit::ALL[s]))
}

fn assert_exact(cards: Vec<Card>, scoring: Scoring) -> Result<(), TestCaseError> {
    let mut hand = Hand::with_scoring(scoring);
    for c in cards {
        let _ = hand.add(c);
    }
    let unorganized = hand.score();
    hand.auto_match();
    prop_assert!(hand.score() <= unorganized);
    prop_assert_eq!(hand.score(), naive_min_leftover(&hand.cards(), scoring));

    let candidates = enumerate_matches(hand.cards());
    prop_assert_eq!(candidates.len(), naive_matches(&hand.cards()).len());
    let best = select_optimal(&candidates, scoring);
    prop_assert_eq!(best.len(), hand.matched_sets().len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn auto_match_is_exact_on_random_hands(cards in prop::collection::btree_set(any_card(), 0..=HAND_SIZE)) {
        assert_exact(cards.into_iter().collect(), Scoring::PointValue)?;
    }

    #[test]
    fn auto_match_is_exact_on_clustered_hands(
        cards in prop::collection::btree_set(clustered_card(), 3..=HAND_SIZE),
        by_count in any::<bool>(),
    ) {
        let scoring = if by_count { Scoring::CardCount } else { Scoring::PointValue };
        assert_exact(cards.into_iter().collect(), scoring)?;
    }
}
