//! A single baccarat coup: two hands, the third-card rule, the result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Hand};
use crate::core::{IndexSource, RuleError, RuleResult, Side};
use crate::rules::{CardGame, GameResult};
use crate::scoring::baccarat::is_natural;
use crate::scoring::baccarat_points;

/// Which hand won the coup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaccaratOutcome {
    PlayerWins,
    BankerWins,
    Tie,
}

/// Player and banker hands drawn from one shoe.
///
/// The banker sits in the `Side::Opponent` seat when reported as a
/// [`GameResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaccaratRound {
    shoe: Deck,
    player: Hand,
    banker: Hand,
    outcome: Option<BaccaratOutcome>,
}

impl BaccaratRound {
    /// Shuffle a 53-card shoe (joker included) and deal.
    pub fn deal<R: IndexSource + ?Sized>(rng: &mut R) -> RuleResult<Self> {
        Self::deal_from(Deck::shuffled(true, rng))
    }

    /// Deal alternately off the top of `shoe`, player first.
    pub fn deal_from(mut shoe: Deck) -> RuleResult<Self> {
        let dealt = shoe.draw_many(4).ok_or(RuleError::DeckExhausted)?;
        let mut player = Hand::new();
        let mut banker = Hand::new();
        for (i, card) in dealt.into_iter().enumerate() {
            if i % 2 == 0 {
                player.push(card.revealed());
            } else {
                banker.push(card.revealed());
            }
        }
        Ok(Self {
            shoe,
            player,
            banker,
            outcome: None,
        })
    }

    #[must_use]
    pub fn player_hand(&self) -> &[Card] {
        &self.player
    }

    #[must_use]
    pub fn banker_hand(&self) -> &[Card] {
        &self.banker
    }

    #[must_use]
    pub fn player_points(&self) -> u8 {
        baccarat_points(&self.player)
    }

    #[must_use]
    pub fn banker_points(&self) -> u8 {
        baccarat_points(&self.banker)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<BaccaratOutcome> {
        self.outcome
    }

    /// Apply the third-card rule and settle.
    ///
    /// A natural on either side stands both hands. Otherwise a player on 0-5
    /// draws, after which the banker draws on 0-5 unless the player's new
    /// total is 8 or 9. A player standing on 6 or 7 leaves the banker to
    /// draw on 0-5.
    pub fn play(&mut self) -> RuleResult<BaccaratOutcome> {
        if self.outcome.is_some() {
            return Err(RuleError::GameOver);
        }
        let mut next = self.clone();
        let player = next.player_points();
        let banker = next.banker_points();

        if !(is_natural(player) || is_natural(banker)) {
            if player <= 5 {
                next.draw_to(Side::Player)?;
                if banker <= 5 && !is_natural(next.player_points()) {
                    next.draw_to(Side::Opponent)?;
                }
            } else if banker <= 5 {
                next.draw_to(Side::Opponent)?;
            }
        }

        let outcome = match next.player_points().cmp(&next.banker_points()) {
            Ordering::Greater => BaccaratOutcome::PlayerWins,
            Ordering::Less => BaccaratOutcome::BankerWins,
            Ordering::Equal => BaccaratOutcome::Tie,
        };
        next.outcome = Some(outcome);
        log::debug!(
            "baccarat: player {} banker {} -> {:?}",
            next.player_points(),
            next.banker_points(),
            outcome
        );
        *self = next;
        Ok(outcome)
    }

    fn draw_to(&mut self, side: Side) -> RuleResult<()> {
        let card = self.shoe.draw().ok_or(RuleError::DeckExhausted)?.revealed();
        match side {
            Side::Player => self.player.push(card),
            Side::Opponent => self.banker.push(card),
        }
        Ok(())
    }
}

impl CardGame for BaccaratRound {
    fn result(&self) -> Option<GameResult> {
        self.outcome.map(|outcome| match outcome {
            BaccaratOutcome::PlayerWins => GameResult::Winner(Side::Player),
            BaccaratOutcome::BankerWins => GameResult::Winner(Side::Opponent),
            BaccaratOutcome::Tie => GameResult::Draw,
        })
    }

    fn cards_in_play(&self) -> usize {
        self.shoe.len() + self.player.len() + self.banker.len()
    }
}
