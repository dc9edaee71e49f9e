use crate::cards::Card;
use crate::matcher::{group_in, run_in, CardMask, Cards};
use std::fmt;

/// Whether a matched set is a run or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    Run,
    Group,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Run => write!(f, "run"),
            MatchKind::Group => write!(f, "group"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    #[error("cards do not form a valid group")]
    NotAGroup,
    #[error("cards do not form a valid run")]
    NotARun,
    #[error("{0} is not in the hand")]
    NotInHand(Card),
    #[error("{0} already belongs to a matched set")]
    AlreadyMatched(Card),
}

impl MatchError {
    fn shape(kind: MatchKind) -> Self {
        match kind {
            MatchKind::Run => MatchError::NotARun,
            MatchKind::Group => MatchError::NotAGroup,
        }
    }
}

/// An immutable, validated run or group.
///
/// ```
/// use rummy_rs::cards::parse_cards;
/// use rummy_rs::matched::{MatchKind, MatchedSet};
///
/// let set = MatchedSet::try_new(&parse_cards("Qs Js Ks").unwrap(), MatchKind::Run).unwrap();
/// assert!(set.is_run());
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string(), "run[Js Qs Ks]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchedSet {
    cards: CardMask,
    kind: MatchKind,
}

impl MatchedSet {
    /// Validate `cards` as `kind` and build the set.
    pub fn try_new(cards: &[Card], kind: MatchKind) -> Result<Self, MatchError> {
        let mask: CardMask = cards.iter().collect();
        if mask.len() != cards.len() {
            return Err(MatchError::shape(kind));
        }
        Self::from_mask(mask, kind)
    }

    pub(crate) fn from_mask(cards: CardMask, kind: MatchKind) -> Result<Self, MatchError> {
        let valid = match kind {
            MatchKind::Run => run_in(cards),
            MatchKind::Group => group_in(cards),
        };
        if valid {
            Ok(Self { cards, kind })
        } else {
            Err(MatchError::shape(kind))
        }
    }

    /// Build from an enumerated candidate, which has already passed
    /// validation. Runs never repeat a rank, so two cards of one rank mean a
    /// group.
    pub(crate) fn from_candidate(cards: CardMask) -> Self {
        let mut iter = cards.iter();
        let kind = match (iter.next(), iter.next()) {
            (Some(a), Some(b)) if a.rank() == b.rank() => MatchKind::Group,
            _ => MatchKind::Run,
        };
        Self { cards, kind }
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    pub fn is_group(&self) -> bool {
        self.kind == MatchKind::Group
    }

    pub fn is_run(&self) -> bool {
        self.kind == MatchKind::Run
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in ascending order.
    pub fn iter(&self) -> Cards {
        self.cards.iter()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.cards.to_vec()
    }

    pub fn mask(&self) -> CardMask {
        self.cards
    }

    pub fn point_value(&self) -> u32 {
        self.iter().map(Card::point_value).sum()
    }
}

impl<'a> IntoIterator for &'a MatchedSet {
    type Item = Card;
    type IntoIter = Cards;

    fn into_iter(self) -> Cards {
        self.iter()
    }
}

impl fmt::Display for MatchedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.cards)
    }
}
