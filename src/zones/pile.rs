//! Piles: ordered card stacks owned by a table.
//!
//! A `Pile` owns its cards outright. Moving a card between piles transfers the
//! value, so a card can never sit in two piles at once.
//!
//! Index 0 is the bottom of the pile and the last index is the top.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Which Klondike pile a card lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    /// Face-down draw pile.
    Stock,
    /// Face-up overflow of the stock.
    Waste,
    /// Foundation `0..4`.
    Foundation(usize),
    /// Tableau column `0..7`.
    Tableau(usize),
}

impl PileId {
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }

    /// Short name for messages and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PileId::Stock => "stock",
            PileId::Waste => "waste",
            PileId::Foundation(_) => "foundation",
            PileId::Tableau(_) => "tableau",
        }
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(i) => write!(f, "Foundation({})", i),
            PileId::Tableau(i) => write!(f, "Tableau({})", i),
        }
    }
}

/// An ordered stack of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap cards, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Put several cards on top, in order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove every card from `index` up to the top, bottom-most first.
    ///
    /// Returns an empty vec if `index` is past the top.
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(index)
    }

    /// Remove every card, bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the top card.
    #[must_use]
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// Turn the top card face up. Returns true if it was face down.
    pub fn flip_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
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

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
