//! Name the rank of a hidden card.

mod game;

pub use game::{GuessOutcome, GuessTheCard};
