//! Punto banco with a 53-card shoe.

mod game;

pub use game::{BaccaratOutcome, BaccaratRound};
