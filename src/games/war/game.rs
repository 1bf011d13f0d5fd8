//! War: two decks, one comparison per draw, recursive ties.

use std::cmp::Ordering;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::{IndexSource, RuleError, RuleResult, Side, SideMap, WarConfig};
use crate::rules::{CardGame, GameResult};
use crate::scoring::compare_ranks;

/// Whether more draws are possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarStatus {
    Playing,
    GameOver,
}

/// What a single `draw` produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// One comparison settled the draw; play continues.
    Continue,
    /// At least one war was fought and settled; play continues.
    War,
    /// The player now holds every card or the opponent could not stake.
    PlayerWins,
    /// The opponent now holds every card or the player could not stake.
    OpponentWins,
    /// The round limit was reached with both sides holding 26 cards.
    Stalemate,
}

/// Report of the most recent draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The face-up cards of the deciding comparison (the first pair when a
    /// side could not stake).
    pub revealed: SideMap<Card>,
    /// Number of war escalations.
    pub wars: u32,
    /// Side that took the pot.
    pub winner: Side,
    /// Cards moved to the winner's deck, their own included.
    pub cards_won: usize,
    /// Side that ran out of cards mid-war, if any.
    pub short_stake: Option<Side>,
}

/// Two-deck War table.
///
/// The front of each deck is its top. Won cards go to the back, the winner's
/// own cards first and the loser's after, each in the order they were played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarState {
    config: WarConfig,
    decks: SideMap<Vector<Card>>,
    status: WarStatus,
    result: Option<GameResult>,
    rounds: u32,
    last_round: Option<Round>,
}

impl WarState {
    /// Shuffle a fresh deck and split it 26/26 with the default rules.
    #[must_use]
    pub fn deal<R: IndexSource + ?Sized>(rng: &mut R) -> Self {
        Self::deal_with(WarConfig::default(), rng)
    }

    /// Shuffle a fresh deck and split it 26/26: the player takes the first
    /// half of the shuffled order, the opponent the second.
    #[must_use]
    pub fn deal_with<R: IndexSource + ?Sized>(config: WarConfig, rng: &mut R) -> Self {
        let mut cards = Deck::shuffled(false, rng).into_cards();
        let opponent = cards.split_off(cards.len() / 2);
        let state = Self::build(config, cards, opponent);
        log::debug!(
            "dealt war: {} / {}",
            state.decks[Side::Player].len(),
            state.decks[Side::Opponent].len()
        );
        state
    }

    /// Start from explicit decks, top card first.
    ///
    /// Both decks must be non-empty.
    pub fn from_decks(config: WarConfig, player: Vec<Card>, opponent: Vec<Card>) -> RuleResult<Self> {
        if player.is_empty() || opponent.is_empty() {
            return Err(RuleError::InvalidLayout("both sides need cards".into()));
        }
        Ok(Self::build(config, player, opponent))
    }

    fn build(config: WarConfig, player: Vec<Card>, opponent: Vec<Card>) -> Self {
        Self {
            config,
            decks: SideMap::new(player.into_iter().collect(), opponent.into_iter().collect()),
            status: WarStatus::Playing,
            result: None,
            rounds: 0,
            last_round: None,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> WarStatus {
        self.status
    }

    /// Overall winner once the game is over; `None` while playing or after a
    /// stalemate.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.result {
            Some(GameResult::Winner(side)) => Some(side),
            _ => None,
        }
    }

    /// A side's deck, top card first.
    #[must_use]
    pub fn deck(&self, side: Side) -> &Vector<Card> {
        &self.decks[side]
    }

    /// Number of completed draws.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }

    // === Play ===

    /// Play one draw: both sides reveal their top card and the higher rank
    /// takes both. A tie starts a war, repeated until the revealed cards
    /// differ or a side cannot stake.
    ///
    /// Once the game is over this changes nothing and repeats the final
    /// outcome.
    pub fn draw(&mut self) -> DrawOutcome {
        if self.status == WarStatus::GameOver {
            return self.terminal_outcome();
        }
        if let Some(empty) = Side::BOTH.into_iter().find(|&s| self.decks[s].is_empty()) {
            self.finish(GameResult::Winner(empty.other()));
            return self.terminal_outcome();
        }

        let (player_card, opponent_card) = match (
            self.decks[Side::Player].pop_front(),
            self.decks[Side::Opponent].pop_front(),
        ) {
            (Some(p), Some(o)) => (p, o),
            _ => return self.terminal_outcome(),
        };
        let mut pot = SideMap::new(vec![player_card], vec![opponent_card]);
        let mut revealed = SideMap::new(player_card.revealed(), opponent_card.revealed());

        let mut wars = 0;
        let mut short_stake = None;
        let winner = loop {
            match compare_ranks(revealed[Side::Player].rank, revealed[Side::Opponent].rank, self.config.ace) {
                Ordering::Greater => break Side::Player,
                Ordering::Less => break Side::Opponent,
                Ordering::Equal => {}
            }

            wars += 1;
            let needed = self.config.cards_per_stake();
            if let Some(short) = Side::BOTH.into_iter().find(|&s| self.decks[s].len() < needed) {
                log::debug!("{} cannot stake war {} ({} cards left)", short, wars, self.decks[short].len());
                short_stake = Some(short);
                break short.other();
            }

            for side in Side::BOTH {
                for _ in 0..needed {
                    if let Some(card) = self.decks[side].pop_front() {
                        pot[side].push(card);
                    }
                }
                if let Some(last) = pot[side].last() {
                    revealed[side] = last.revealed();
                }
            }
            log::debug!(
                "war {}: {} vs {}",
                wars,
                revealed[Side::Player],
                revealed[Side::Opponent]
            );
        };

        let loser = winner.other();
        let mut cards_won = pot[winner].len() + pot[loser].len();
        let (own, theirs) = (std::mem::take(&mut pot[winner]), std::mem::take(&mut pot[loser]));
        for card in own.into_iter().chain(theirs) {
            self.decks[winner].push_back(card.hidden());
        }
        if short_stake.is_some() {
            let forfeited = std::mem::take(&mut self.decks[loser]);
            cards_won += forfeited.len();
            for card in forfeited {
                self.decks[winner].push_back(card);
            }
        }

        self.rounds += 1;
        self.last_round = Some(Round {
            revealed,
            wars,
            winner,
            cards_won,
            short_stake,
        });

        if self.decks[loser].is_empty() {
            self.finish(GameResult::Winner(winner));
        } else if self.config.round_limit.is_some_and(|limit| self.rounds >= limit) {
            let held = |s: Side| self.decks[s].len();
            let result = match held(Side::Player).cmp(&held(Side::Opponent)) {
                Ordering::Greater => GameResult::Winner(Side::Player),
                Ordering::Less => GameResult::Winner(Side::Opponent),
                Ordering::Equal => GameResult::Draw,
            };
            self.finish(result);
        }

        match self.status {
            WarStatus::GameOver => self.terminal_outcome(),
            WarStatus::Playing if wars > 0 => DrawOutcome::War,
            WarStatus::Playing => DrawOutcome::Continue,
        }
    }

    /// Draw until the game ends or `max_draws` is reached.
    pub fn play_out(&mut self, max_draws: usize) -> Option<GameResult> {
        for _ in 0..max_draws {
            if self.status == WarStatus::GameOver {
                break;
            }
            self.draw();
        }
        self.result
    }

    fn finish(&mut self, result: GameResult) {
        self.status = WarStatus::GameOver;
        self.result = Some(result);
        log::debug!("war over after {} draws: {:?}", self.rounds, result);
    }

    fn terminal_outcome(&self) -> DrawOutcome {
        match self.result {
            Some(GameResult::Winner(Side::Player)) => DrawOutcome::PlayerWins,
            Some(GameResult::Winner(Side::Opponent)) => DrawOutcome::OpponentWins,
            Some(GameResult::Draw) | None => DrawOutcome::Stalemate,
        }
    }
}

impl CardGame for WarState {
    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn cards_in_play(&self) -> usize {
        self.decks.iter().map(|(_, deck)| deck.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::GameRng;

    fn c(v: u8) -> Card {
        Card::new(Suit::Heart, Rank::new(v).unwrap())
    }

    fn s(v: u8) -> Card {
        Card::new(Suit::Spade, Rank::new(v).unwrap())
    }

    #[test]
    fn test_deal_splits_evenly() {
        let state = WarState::deal(&mut GameRng::new(42));
        assert_eq!(state.deck(Side::Player).len(), 26);
        assert_eq!(state.deck(Side::Opponent).len(), 26);
        assert_eq!(state.cards_in_play(), 52);
        assert_eq!(state.status(), WarStatus::Playing);
    }

    #[test]
    fn test_higher_card_takes_both() {
        let mut state =
            WarState::from_decks(WarConfig::default(), vec![c(9), c(2)], vec![s(4), s(3)]).unwrap();
        assert_eq!(state.draw(), DrawOutcome::Continue);
        assert_eq!(state.deck(Side::Player).len(), 3);
        assert_eq!(state.deck(Side::Player).back(), Some(&s(4)));
        assert_eq!(state.last_round().unwrap().winner, Side::Player);
    }

    #[test]
    fn test_ace_is_lowest_by_default() {
        let mut state =
            WarState::from_decks(WarConfig::default(), vec![c(1), c(2)], vec![s(2), s(3)]).unwrap();
        state.draw();
        assert_eq!(state.last_round().unwrap().winner, Side::Opponent);

        let high = WarConfig::default().with_ace(crate::core::AcePosition::High);
        let mut state = WarState::from_decks(high, vec![c(1), c(2)], vec![s(13), s(3)]).unwrap();
        state.draw();
        assert_eq!(state.last_round().unwrap().winner, Side::Player);
    }

    #[test]
    fn test_last_card_lost_ends_game() {
        let mut state = WarState::from_decks(WarConfig::default(), vec![c(2)], vec![s(5), s(6)]).unwrap();
        assert_eq!(state.draw(), DrawOutcome::OpponentWins);
        assert_eq!(state.winner(), Some(Side::Opponent));
        assert_eq!(state.deck(Side::Opponent).len(), 3);

        let frozen = state.clone();
        assert_eq!(state.draw(), DrawOutcome::OpponentWins);
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_round_limit_stalemate() {
        let config = WarConfig::default().with_round_limit(1);
        let mut state = WarState::from_decks(config, vec![c(9), c(2)], vec![s(4), s(10)]).unwrap();
        assert_eq!(state.draw(), DrawOutcome::PlayerWins);

        let config = WarConfig::default().with_round_limit(2);
        let mut state = WarState::from_decks(config, vec![c(9), c(2)], vec![s(4), s(10)]).unwrap();
        state.draw();
        assert_eq!(state.draw(), DrawOutcome::Stalemate);
        assert_eq!(state.result(), Some(GameResult::Draw));
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_from_decks_rejects_empty() {
        assert!(WarState::from_decks(WarConfig::default(), vec![], vec![s(2)]).is_err());
    }
}
