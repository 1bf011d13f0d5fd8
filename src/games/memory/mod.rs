//! Pair-matching on a twenty-card board.

mod game;

pub use game::{FlipOutcome, MemoryBoard, PAIRS};
