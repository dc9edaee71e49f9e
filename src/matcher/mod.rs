//! The matching engine: validation of runs and groups, enumeration of every
//! valid match in a pool of cards, and exact selection of the best disjoint
//! partition.
//!
//! Both searches are exponential in the number of cards. Hands are capped at
//! [`HAND_SIZE`](crate::hand::HAND_SIZE) cards, which keeps them exhaustive.

pub(crate) mod card_mask;
pub(crate) mod enumerate;
pub(crate) mod selector;
pub(crate) mod validator;

pub use card_mask::{CardMask, Cards};
pub use enumerate::enumerate_matches;
pub use selector::{select_optimal, Partition};
pub use validator::{group_exists, group_in, match_in, run_exists, run_in};

/// Fewest cards a run or group may hold.
pub const MIN_MATCHED_SIZE: usize = 3;
