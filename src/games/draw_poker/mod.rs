//! Five-card draw against the paytable categories.

mod game;

pub use game::{DrawPoker, HAND_SIZE};
