//! One round of blackjack against the dealer.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Hand};
use crate::core::{BlackjackConfig, IndexSource, RuleError, RuleResult, Side};
use crate::rules::{CardGame, GameResult};
use crate::scoring::{blackjack_value, is_blackjack_natural, is_bust, BLACKJACK};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlackjackOutcome {
    PlayerWins,
    DealerWins,
    PlayerBlackjack,
    DealerBlackjack,
    Push,
    PlayerBusts,
}

impl BlackjackOutcome {
    /// Table result from the player's point of view.
    #[must_use]
    pub const fn result(self) -> GameResult {
        match self {
            BlackjackOutcome::PlayerWins | BlackjackOutcome::PlayerBlackjack => {
                GameResult::Winner(Side::Player)
            }
            BlackjackOutcome::DealerWins
            | BlackjackOutcome::DealerBlackjack
            | BlackjackOutcome::PlayerBusts => GameResult::Winner(Side::Opponent),
            BlackjackOutcome::Push => GameResult::Draw,
        }
    }
}

/// A dealt blackjack round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackRound {
    config: BlackjackConfig,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    outcome: Option<BlackjackOutcome>,
}

impl BlackjackRound {
    /// Shuffle a fresh deck and deal.
    pub fn deal<R: IndexSource + ?Sized>(config: BlackjackConfig, rng: &mut R) -> RuleResult<Self> {
        Self::deal_from(config, Deck::shuffled(false, rng))
    }

    /// Deal from a prepared deck: two cards to the dealer, then two to the
    /// player, all off the top.
    pub fn deal_from(config: BlackjackConfig, mut deck: Deck) -> RuleResult<Self> {
        let dealer = deck.draw_many(2).ok_or(RuleError::DeckExhausted)?;
        let player = deck.draw_many(2).ok_or(RuleError::DeckExhausted)?;
        Ok(Self {
            config,
            deck,
            player: player.into_iter().map(Card::revealed).collect(),
            dealer: dealer.into_iter().map(Card::revealed).collect(),
            outcome: None,
        })
    }

    #[must_use]
    pub fn player_hand(&self) -> &[Card] {
        &self.player
    }

    #[must_use]
    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer
    }

    #[must_use]
    pub fn player_value(&self) -> u8 {
        blackjack_value(&self.player)
    }

    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        blackjack_value(&self.dealer)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<BlackjackOutcome> {
        self.outcome
    }

    /// Give the player one more card. Going over 21 ends the round.
    pub fn hit(&mut self) -> RuleResult<Card> {
        if self.outcome.is_some() {
            return Err(RuleError::GameOver);
        }
        let card = self.deck.draw().ok_or(RuleError::DeckExhausted)?.revealed();
        self.player.push(card);
        if is_bust(&self.player) {
            log::debug!("player busts with {}", self.player_value());
            self.outcome = Some(BlackjackOutcome::PlayerBusts);
        }
        Ok(card)
    }

    /// End the player's turn: the dealer draws while below the standing
    /// total, then the round settles.
    pub fn stand(&mut self) -> RuleResult<BlackjackOutcome> {
        if self.outcome.is_some() {
            return Err(RuleError::GameOver);
        }
        while blackjack_value(&self.dealer) < self.config.dealer_stands_on {
            match self.deck.draw() {
                Some(card) => self.dealer.push(card.revealed()),
                None => {
                    log::warn!("deck ran out while the dealer was drawing");
                    break;
                }
            }
        }
        let outcome = self.settle();
        log::debug!(
            "blackjack settled: player {} dealer {} -> {:?}",
            self.player_value(),
            self.dealer_value(),
            outcome
        );
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    fn settle(&self) -> BlackjackOutcome {
        let player = self.player_value();
        let dealer = self.dealer_value();

        if dealer > BLACKJACK || player > dealer {
            BlackjackOutcome::PlayerWins
        } else if is_blackjack_natural(&self.dealer) {
            BlackjackOutcome::DealerBlackjack
        } else if is_blackjack_natural(&self.player) {
            BlackjackOutcome::PlayerBlackjack
        } else if player == dealer {
            BlackjackOutcome::Push
        } else {
            BlackjackOutcome::DealerWins
        }
    }
}

impl CardGame for BlackjackRound {
    fn result(&self) -> Option<GameResult> {
        self.outcome.map(BlackjackOutcome::result)
    }

    fn cards_in_play(&self) -> usize {
        self.deck.len() + self.player.len() + self.dealer.len()
    }
}
