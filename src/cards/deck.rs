//! The standard deck: construction and Fisher–Yates shuffling.
//!
//! Deck order is significant. Index 0 is the bottom of the deck and the last
//! index is the top, so `draw` pops from the end.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::IndexSource;

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// An ordered sequence of unique cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Build the canonical deck: suit-major (hearts, diamonds, clubs, spades),
/// ace to king within a suit, face down, joker last when requested.
#[must_use]
pub fn new_deck(include_joker: bool) -> Deck {
    let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE + 1);
    for suit in Suit::STANDARD {
        cards.extend(Rank::all().map(|rank| Card::new(suit, rank)));
    }
    if include_joker {
        cards.push(Card::joker());
    }
    Deck { cards }
}

/// Shuffle in place with Fisher–Yates.
///
/// Walks `i` from the last index down to 1 and swaps with a uniform index in
/// `0..=i`, so an `n`-card deck consumes exactly `n - 1` draws.
pub fn shuffle<R: IndexSource + ?Sized>(deck: &mut Deck, rng: &mut R) {
    shuffle_slice(&mut deck.cards, rng);
}

/// Fisher–Yates over any slice; shared by decks and memory boards.
pub fn shuffle_slice<T, R: IndexSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_upto(i);
        items.swap(i, j);
    }
}

impl Deck {
    /// Canonical 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        new_deck(false)
    }

    /// Wrap an explicit card order (bottom first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Canonical deck shuffled by `rng`.
    #[must_use]
    pub fn shuffled<R: IndexSource + ?Sized>(include_joker: bool, rng: &mut R) -> Self {
        let mut deck = new_deck(include_joker);
        shuffle(&mut deck, rng);
        deck
    }

    /// Shuffle this deck in place.
    pub fn shuffle<R: IndexSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle(self, rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove the top `count` cards, top card first. Returns `None` (and
    /// leaves the deck untouched) if fewer than `count` remain.
    pub fn draw_many(&mut self, count: usize) -> Option<Vec<Card>> {
        if count > self.cards.len() {
            return None;
        }
        let split = self.cards.len() - count;
        let mut taken = self.cards.split_off(split);
        taken.reverse();
        Some(taken)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Give up ownership of the cards, bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// True if no suit/rank pair appears twice.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        let mut seen = rustc_hash::FxHashSet::default();
        self.cards.iter().all(|c| seen.insert(c.face()))
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
