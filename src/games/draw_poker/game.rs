//! Deal five, mark discards, draw once, classify.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::{IndexSource, PokerConfig, RuleError, RuleResult};
use crate::scoring::{evaluate_with, HandCategory};

/// Cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A single five-card draw hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPoker {
    config: PokerConfig,
    deck: Deck,
    hand: [Card; HAND_SIZE],
    discards: [bool; HAND_SIZE],
    result: Option<HandCategory>,
}

impl DrawPoker {
    /// Shuffle a fresh deck and deal five cards.
    pub fn deal<R: IndexSource + ?Sized>(config: PokerConfig, rng: &mut R) -> RuleResult<Self> {
        Self::deal_from(config, Deck::shuffled(false, rng))
    }

    /// Deal the top five cards of `deck`.
    pub fn deal_from(config: PokerConfig, mut deck: Deck) -> RuleResult<Self> {
        let dealt = deck.draw_many(HAND_SIZE).ok_or(RuleError::DeckExhausted)?;
        let mut hand = [Card::joker(); HAND_SIZE];
        for (slot, card) in hand.iter_mut().zip(dealt) {
            *slot = card.revealed();
        }
        Ok(Self {
            config,
            deck,
            hand,
            discards: [false; HAND_SIZE],
            result: None,
        })
    }

    #[must_use]
    pub fn hand(&self) -> &[Card; HAND_SIZE] {
        &self.hand
    }

    /// Whether the card at `index` is marked for replacement.
    #[must_use]
    pub fn is_marked(&self, index: usize) -> bool {
        self.discards.get(index).copied().unwrap_or(false)
    }

    /// Final category once the draw has happened.
    #[must_use]
    pub fn result(&self) -> Option<HandCategory> {
        self.result
    }

    /// Category of the hand as it stands.
    #[must_use]
    pub fn evaluate(&self) -> HandCategory {
        evaluate_with(&self.hand, self.config.straights)
    }

    /// Flip the discard mark on one card. Returns the new mark.
    pub fn toggle(&mut self, index: usize) -> RuleResult<bool> {
        if self.result.is_some() {
            return Err(RuleError::GameOver);
        }
        let mark = self
            .discards
            .get_mut(index)
            .ok_or(RuleError::invalid("no card at that position"))?;
        *mark = !*mark;
        Ok(*mark)
    }

    /// Replace every marked card from the deck, in position order, and
    /// classify the final hand.
    pub fn draw(&mut self) -> RuleResult<HandCategory> {
        if self.result.is_some() {
            return Err(RuleError::GameOver);
        }
        let marked = self.discards.iter().filter(|&&m| m).count();
        let mut replacements = self.deck.draw_many(marked).ok_or(RuleError::DeckExhausted)?.into_iter();

        for (slot, mark) in self.hand.iter_mut().zip(self.discards.iter_mut()) {
            if *mark {
                if let Some(card) = replacements.next() {
                    *slot = card.revealed();
                }
                *mark = false;
            }
        }

        let category = self.evaluate();
        log::debug!("drew {} card(s): {}", marked, category);
        self.result = Some(category);
        Ok(category)
    }
}
