//! Memory board: ten distinct cards, each twice, flipped two at a time.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{shuffle_slice, Card, Deck, Rank, Suit};
use crate::core::{IndexSource, RuleError, RuleResult, Side};
use crate::rules::{CardGame, GameResult};

/// Distinct cards on the board.
pub const PAIRS: usize = 10;

/// What a flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// The card was already matched or is already face up this turn.
    Ignored,
    /// First card of a pair turned up.
    Revealed,
    /// Second card matched the first; both stay up.
    Matched,
    /// Second card did not match; both go back down.
    Mismatched,
    /// The last pair was matched.
    Won,
}

/// Twenty face-down cards and the pairs found so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBoard {
    cards: Vec<Card>,
    matched: FxHashSet<(Suit, Rank)>,
    selected: SmallVec<[usize; 2]>,
    flips: u32,
}

impl MemoryBoard {
    /// Shuffle a deck, take ten cards, double them and shuffle the board.
    #[must_use]
    pub fn deal<R: IndexSource + ?Sized>(rng: &mut R) -> Self {
        let deck = Deck::shuffled(false, rng);
        let mut cards: Vec<Card> = deck.cards()[..PAIRS].to_vec();
        cards.extend_from_within(..);
        shuffle_slice(&mut cards, rng);
        Self::build(cards)
    }

    /// Board from an explicit layout: every card must appear exactly twice.
    pub fn from_cards(cards: Vec<Card>) -> RuleResult<Self> {
        let mut counts = rustc_hash::FxHashMap::default();
        for card in &cards {
            *counts.entry(card.face()).or_insert(0u8) += 1;
        }
        if cards.len() != PAIRS * 2 || counts.len() != PAIRS || counts.values().any(|&n| n != 2) {
            return Err(RuleError::InvalidLayout(format!(
                "need {} distinct cards twice each",
                PAIRS
            )));
        }
        Ok(Self::build(cards))
    }

    fn build(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().map(Card::hidden).collect(),
            matched: FxHashSet::default(),
            selected: SmallVec::new(),
            flips: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at `index` if it is currently face up.
    #[must_use]
    pub fn visible(&self, index: usize) -> Option<Card> {
        let card = self.cards.get(index)?;
        (self.matched.contains(&card.face()) || self.selected.contains(&index)).then_some(card.revealed())
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.matched.len()
    }

    /// Flips that turned a card up.
    #[must_use]
    pub fn flips(&self) -> u32 {
        self.flips
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched.len() == PAIRS
    }

    /// Turn up the card at `index`.
    pub fn flip(&mut self, index: usize) -> RuleResult<FlipOutcome> {
        if self.is_won() {
            return Err(RuleError::GameOver);
        }
        let card = *self
            .cards
            .get(index)
            .ok_or(RuleError::invalid("no card at that position"))?;
        if self.matched.contains(&card.face()) || self.selected.contains(&index) {
            return Ok(FlipOutcome::Ignored);
        }

        self.flips += 1;
        self.selected.push(index);
        if self.selected.len() < 2 {
            return Ok(FlipOutcome::Revealed);
        }

        let first = self.cards[self.selected[0]];
        self.selected.clear();
        if !first.same_face(&card) {
            return Ok(FlipOutcome::Mismatched);
        }

        self.matched.insert(card.face());
        log::debug!("matched {} ({}/{})", card, self.matched.len(), PAIRS);
        if self.is_won() {
            Ok(FlipOutcome::Won)
        } else {
            Ok(FlipOutcome::Matched)
        }
    }
}

impl CardGame for MemoryBoard {
    fn result(&self) -> Option<GameResult> {
        self.is_won().then_some(GameResult::Winner(Side::Player))
    }

    fn cards_in_play(&self) -> usize {
        self.cards.len()
    }
}
