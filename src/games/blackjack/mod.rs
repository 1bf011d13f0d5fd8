//! Blackjack against a dealer who hits below a configurable total.

mod game;

pub use game::{BlackjackOutcome, BlackjackRound};
