//! rummy-rs: Rummy hand model and matching engine
//!
//! Goals:
//! - Exact, deterministic partition of a hand into runs and groups
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: organize a hand
//! ```
//! use rummy_rs::cards::{Card, Rank, Suit};
//! use rummy_rs::hand::Hand;
//!
//! let mut hand = Hand::new();
//! for card in [
//!     Card::new(Rank::Seven, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Seven, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ] {
//!     hand.add(card).unwrap();
//! }
//!
//! hand.auto_match();
//! assert_eq!(hand.matched_sets().len(), 2);
//! assert_eq!(hand.unmatched_cards(), vec![Card::new(Rank::King, Suit::Hearts)]);
//! assert_eq!(hand.score(), 10);
//! ```
//!
//! ## Lower level
//! The [`matcher`] module exposes the validator, the candidate enumerator and
//! the partition selector for callers that work on plain card collections.

pub mod cards;
pub mod deck;
pub mod hand;
pub mod matched;
pub mod matcher;
pub mod scoring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
