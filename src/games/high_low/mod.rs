//! Guess whether the next card ranks higher or lower.

mod game;

pub use game::{Guess, GuessResult, HighLow};
pub(crate) use game::random_card;
