//! High-or-Low table.
//!
//! Cards come from an infinite shoe: each one is an independent uniform
//! suit and rank, so the same card can appear twice in a row.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::{GameRng, HighLowConfig, RuleError, RuleResult};
use crate::scoring::compare_ranks;

/// The player's call about the next card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    Higher,
    Lower,
}

/// How a call turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessResult {
    Correct,
    Incorrect,
    /// Same rank; neither call wins.
    Equal,
}

/// Draw one card from the infinite shoe.
pub(crate) fn random_card(rng: &mut GameRng) -> Card {
    let suit = Suit::STANDARD[rng.gen_range(0..Suit::STANDARD.len())];
    let rank = Rank::ALL[rng.gen_range(0..Rank::ALL.len())];
    Card::new(suit, rank).revealed()
}

/// High-or-Low session with its own RNG stream.
#[derive(Clone, Debug)]
pub struct HighLow {
    config: HighLowConfig,
    rng: GameRng,
    current: Option<Card>,
    correct: u32,
    incorrect: u32,
}

impl HighLow {
    #[must_use]
    pub fn new(config: HighLowConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            current: None,
            correct: 0,
            incorrect: 0,
        }
    }

    /// The card the next call is measured against.
    #[must_use]
    pub fn current(&self) -> Option<Card> {
        self.current
    }

    /// Calls won and lost so far. Equal ranks count as neither.
    #[must_use]
    pub fn tally(&self) -> (u32, u32) {
        (self.correct, self.incorrect)
    }

    /// Turn up the first card, or replace the current one without a call.
    pub fn reveal(&mut self) -> Card {
        let card = random_card(&mut self.rng);
        self.current = Some(card);
        card
    }

    /// Call the next card against the current one, then make the next card
    /// current.
    pub fn guess(&mut self, guess: Guess) -> RuleResult<(GuessResult, Card)> {
        let current = self.current.ok_or(RuleError::EmptySource("current card"))?;
        let next = random_card(&mut self.rng);

        let result = match (compare_ranks(next.rank, current.rank, self.config.ace), guess) {
            (Ordering::Equal, _) => GuessResult::Equal,
            (Ordering::Greater, Guess::Higher) | (Ordering::Less, Guess::Lower) => GuessResult::Correct,
            _ => GuessResult::Incorrect,
        };
        match result {
            GuessResult::Correct => self.correct += 1,
            GuessResult::Incorrect => self.incorrect += 1,
            GuessResult::Equal => {}
        }
        log::trace!("{} then {}: {:?} -> {:?}", current, next, guess, result);

        self.current = Some(next);
        Ok((result, next))
    }
}
