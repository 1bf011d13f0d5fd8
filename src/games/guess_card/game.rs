//! Guess-the-Card table: name the rank of a freshly drawn hidden card.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::GameRng;
use crate::games::high_low::random_card;

/// Result of naming a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect { actual: Card },
}

/// One hidden card at a time, replaced after every guess.
#[derive(Clone, Debug)]
pub struct GuessTheCard {
    rng: GameRng,
    hidden: Card,
    guesses: u32,
    hits: u32,
}

impl GuessTheCard {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let hidden = random_card(&mut rng);
        Self {
            rng,
            hidden,
            guesses: 0,
            hits: 0,
        }
    }

    /// The hidden card's suit is shown as a hint.
    #[must_use]
    pub fn suit_hint(&self) -> Suit {
        self.hidden.suit
    }

    /// Number of guesses made and how many were right.
    #[must_use]
    pub fn score(&self) -> (u32, u32) {
        (self.guesses, self.hits)
    }

    /// Name a rank. The hidden card is replaced either way.
    pub fn guess(&mut self, rank: Rank) -> GuessOutcome {
        let actual = self.hidden;
        self.guesses += 1;
        self.hidden = random_card(&mut self.rng);

        if actual.rank == rank {
            self.hits += 1;
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect { actual }
        }
    }
}
