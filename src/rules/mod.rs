//! Table trait for game implementations.
//!
//! Tables implement `CardGame` to report:
//! - Whether the game has ended and who won
//! - How many cards the table currently owns

pub mod engine;

pub use engine::{CardGame, GameResult};
