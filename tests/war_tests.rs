//! War engine tests: escalation, short stakes, and conservation of cards.

use card_tables::cards::{Card, Rank, Suit};
use card_tables::core::{AcePosition, GameRng, Side, WarConfig};
use card_tables::games::war::{DrawOutcome, WarState, WarStatus};
use card_tables::rules::{CardGame, GameResult};
use proptest::prelude::*;

fn h(v: u8) -> Card {
    Card::new(Suit::Heart, Rank::new(v).unwrap())
}

fn s(v: u8) -> Card {
    Card::new(Suit::Spade, Rank::new(v).unwrap())
}

fn d(v: u8) -> Card {
    Card::new(Suit::Diamond, Rank::new(v).unwrap())
}

#[test]
fn test_tie_stakes_four_cards_each() {
    let player = vec![h(5), h(2), h(3), h(4), h(9), h(12)];
    let opponent = vec![s(5), s(2), s(3), s(4), s(6), s(11)];
    let mut state = WarState::from_decks(WarConfig::default(), player, opponent).unwrap();

    assert_eq!(state.draw(), DrawOutcome::War);
    let round = state.last_round().unwrap();
    assert_eq!(round.wars, 1);
    assert_eq!(round.winner, Side::Player);
    assert_eq!(round.cards_won, 10);
    assert_eq!(round.revealed[Side::Player].rank.value(), 9);
    assert_eq!(round.revealed[Side::Opponent].rank.value(), 6);
    assert_eq!(round.short_stake, None);

    assert_eq!(state.deck(Side::Player).len(), 11);
    assert_eq!(state.deck(Side::Opponent).len(), 1);
    assert_eq!(state.cards_in_play(), 12);

    // Own pot first, in play order, then the loser's.
    let won: Vec<Card> = state.deck(Side::Player).iter().skip(1).copied().collect();
    let expected = vec![h(5), h(2), h(3), h(4), h(9), s(5), s(2), s(3), s(4), s(6)];
    assert_eq!(won, expected);
}

#[test]
fn test_double_war() {
    let player = vec![h(7), h(2), h(3), h(4), d(10), h(5), h(6), h(8), h(13), h(1)];
    let opponent = vec![s(7), s(2), s(3), s(4), s(10), s(5), s(6), s(8), s(12), s(1)];
    let mut state = WarState::from_decks(WarConfig::default(), player, opponent).unwrap();

    assert_eq!(state.draw(), DrawOutcome::War);
    let round = state.last_round().unwrap();
    assert_eq!(round.wars, 2);
    assert_eq!(round.winner, Side::Player);
    assert_eq!(round.cards_won, 18);
    assert_eq!(state.deck(Side::Opponent).len(), 1);
}

#[test]
fn test_exactly_three_cards_cannot_stake() {
    let player = vec![h(5), h(2), h(3), h(4)];
    let opponent = vec![s(5), s(2), s(3), s(4), s(6), s(7)];
    let mut state = WarState::from_decks(WarConfig::default(), player, opponent).unwrap();

    assert_eq!(state.draw(), DrawOutcome::OpponentWins);
    let round = state.last_round().unwrap();
    assert_eq!(round.short_stake, Some(Side::Player));
    assert_eq!(round.winner, Side::Opponent);
    assert_eq!(round.cards_won, 5);

    assert_eq!(state.status(), WarStatus::GameOver);
    assert_eq!(state.winner(), Some(Side::Opponent));
    assert!(state.deck(Side::Player).is_empty());
    assert_eq!(state.cards_in_play(), 10);
}

#[test]
fn test_player_is_checked_first_when_both_short() {
    let player = vec![h(5), h(2)];
    let opponent = vec![s(5), s(2)];
    let mut state = WarState::from_decks(WarConfig::default(), player, opponent).unwrap();

    assert_eq!(state.draw(), DrawOutcome::OpponentWins);
    assert_eq!(state.deck(Side::Opponent).len(), 4);
}

#[test]
fn test_opponent_short_loses() {
    let player = vec![h(5), h(2), h(3), h(4), h(6)];
    let opponent = vec![s(5), s(2)];
    let mut state = WarState::from_decks(WarConfig::default(), player, opponent).unwrap();

    assert_eq!(state.draw(), DrawOutcome::PlayerWins);
    assert_eq!(state.deck(Side::Player).len(), 7);
}

#[test]
fn test_smaller_stake() {
    let config = WarConfig::default().with_stake(1);
    let player = vec![h(5), h(2), h(9)];
    let opponent = vec![s(5), s(3), s(8)];
    let mut state = WarState::from_decks(config, player, opponent).unwrap();

    assert_eq!(state.draw(), DrawOutcome::PlayerWins);
    let round = state.last_round().unwrap();
    assert_eq!(round.wars, 1);
    assert_eq!(round.cards_won, 6);
    assert_eq!(state.winner(), Some(Side::Player));
}

#[test]
fn test_ace_high_variant() {
    let config = WarConfig::default().with_ace(AcePosition::High);
    let mut state = WarState::from_decks(config, vec![h(1), h(2)], vec![s(13), s(3)]).unwrap();
    assert_eq!(state.draw(), DrawOutcome::Continue);
    assert_eq!(state.last_round().unwrap().winner, Side::Player);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let config = WarConfig::default().with_round_limit(5_000);
    let mut a = WarState::deal_with(config.clone(), &mut GameRng::new(2024));
    let mut b = WarState::deal_with(config, &mut GameRng::new(2024));
    assert_eq!(a.play_out(10_000), b.play_out(10_000));
    assert_eq!(a, b);
    assert!(a.is_terminal());
}

#[test]
fn test_state_serializes() {
    let mut state = WarState::deal(&mut GameRng::new(8));
    state.draw();
    let json = serde_json::to_string(&state).unwrap();
    let back: WarState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_draws_conserve_cards(seed in any::<u64>()) {
        let config = WarConfig::default().with_round_limit(3_000);
        let mut state = WarState::deal_with(config, &mut GameRng::new(seed));

        while !state.is_terminal() {
            state.draw();
            prop_assert_eq!(state.cards_in_play(), 52);
        }
        prop_assert!(state.rounds() <= 3_000);

        match state.result() {
            Some(GameResult::Winner(side)) => {
                let winner_cards = state.deck(side).len();
                let loser_cards = state.deck(side.other()).len();
                prop_assert!(loser_cards == 0 || winner_cards > loser_cards);
            }
            Some(GameResult::Draw) => {
                prop_assert_eq!(state.deck(Side::Player).len(), 26);
            }
            None => prop_assert!(false, "terminal state without a result"),
        }
    }
}
