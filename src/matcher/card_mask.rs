use crate::cards::Card;
use std::fmt;

/// An unordered set of distinct cards packed into the low 52 bits of a `u64`,
/// one bit per [`Card::index`].
///
/// Two masks are equal exactly when they hold the same cards, so a mask is the
/// canonical identity of a candidate match. Iteration yields cards in
/// ascending [`Card`] order (suit, then rank).
///
/// ```
/// use rummy_rs::cards::parse_cards;
/// use rummy_rs::matcher::CardMask;
///
/// let a: CardMask = parse_cards("2c 3c 4c").unwrap().into_iter().collect();
/// let b: CardMask = parse_cards("4c 2c 3c").unwrap().into_iter().collect();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardMask(u64);

impl CardMask {
    const FULL: u64 = (1 << Card::COUNT) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & Self::FULL)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    /// Insert a card; returns `false` if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let fresh = !self.contains(card);
        self.0 |= Self::bit(card);
        fresh
    }

    /// Remove a card; returns `false` if it was absent.
    pub fn remove(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.0 &= !Self::bit(card);
        present
    }

    #[must_use]
    pub const fn with(self, card: Card) -> Self {
        Self(self.0 | Self::bit(card))
    }

    #[must_use]
    pub const fn without(self, card: Card) -> Self {
        Self(self.0 & !Self::bit(card))
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Lowest card in the set.
    pub fn first(self) -> Option<Card> {
        if self.is_empty() {
            None
        } else {
            Card::from_index(self.0.trailing_zeros() as u8)
        }
    }

    pub fn iter(self) -> Cards {
        Cards(self.0)
    }

    pub fn to_vec(self) -> Vec<Card> {
        self.iter().collect()
    }

    const fn bit(card: Card) -> u64 {
        1 << card.index()
    }
}

/// Iterator over the cards of a [`CardMask`], lowest first.
#[derive(Debug, Clone)]
pub struct Cards(u64);

impl Iterator for Cards {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Card::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cards {}

impl IntoIterator for CardMask {
    type Item = Card;
    type IntoIter = Cards;

    fn into_iter(self) -> Cards {
        self.iter()
    }
}

impl FromIterator<Card> for CardMask {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut mask = CardMask::empty();
        for card in iter {
            mask.insert(card);
        }
        mask
    }
}

impl<'a> FromIterator<&'a Card> for CardMask {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Display for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
