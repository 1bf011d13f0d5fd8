//! Klondike move representation and placement rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::zones::PileId;

/// Position of a card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub pile: PileId,
    /// Index within the pile, 0 = bottom.
    pub index: usize,
}

impl CardRef {
    #[must_use]
    pub const fn new(pile: PileId, index: usize) -> Self {
        Self { pile, index }
    }
}

/// Move the card at `from` (and, on the tableau, everything above it) onto
/// the pile `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: CardRef,
    pub to: PileId,
}

impl Move {
    #[must_use]
    pub const fn new(from: CardRef, to: PileId) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}] -> {}", self.from.pile, self.from.index, self.to)
    }
}

/// Tableau rule: kings open empty columns; otherwise alternate colour and
/// go down by exactly one.
#[must_use]
pub fn can_build_on_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::KING,
        Some(top) => card.color() != top.color() && card.rank.value() + 1 == top.rank.value(),
    }
}

/// Foundation rule: aces open empty foundations; otherwise same suit and up
/// by exactly one.
#[must_use]
pub fn can_build_on_foundation(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::ACE,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    }
}
