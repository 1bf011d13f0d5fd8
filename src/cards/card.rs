//! Playing cards: suit, rank, colour and the face-up flag.
//!
//! A `Card` is a plain value. Its suit and rank never change; only the
//! `face_up` flag moves, and only the engine that owns the card flips it.

use serde::{Deserialize, Serialize};

/// Card suit. `Joker` only appears in the baccarat shoe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
    Joker,
}

impl Suit {
    /// The four standard suits in canonical deck order.
    pub const STANDARD: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    /// Hearts and diamonds are red, everything else is black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Club | Suit::Spade | Suit::Joker => Color::Black,
        }
    }

    /// Unicode suit symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
            Suit::Joker => '★',
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (ace) through 13 (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// All thirteen ranks, ace first.
    pub const ALL: [Rank; 13] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
        Rank(13),
    ];

    /// Create a rank, rejecting values outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw rank value (ace = 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.0 >= 11
    }

    /// Iterate over [`Rank::ALL`].
    pub fn all() -> impl Iterator<Item = Rank> {
        Rank::ALL.into_iter()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Engine-owned visibility flag.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// The baccarat joker. It scores like an ace.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Rank::ACE)
    }

    /// Same card, face up.
    #[must_use]
    pub const fn revealed(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Same card, face down.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.face_up = false;
        self
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Identity of the card ignoring the face-up flag.
    #[must_use]
    pub const fn face(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// True if both cards are the same suit and rank.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.face() == other.face()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Suit::Joker => write!(f, "Joker"),
            suit => write!(f, "{}{}", self.rank, suit.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(14), None);
        assert_eq!(Rank::new(1), Some(Rank::ACE));
        assert_eq!(Rank::new(13), Some(Rank::KING));
        assert_eq!(Rank::all().count(), 13);
        assert!(Rank::ALL.iter().enumerate().all(|(i, r)| usize::from(r.value()) == i + 1));
    }

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Heart.color(), Color::Red);
        assert_eq!(Suit::Diamond.color(), Color::Red);
        assert_eq!(Suit::Club.color(), Color::Black);
        assert_eq!(Suit::Spade.color(), Color::Black);
    }

    #[test]
    fn test_face_ignores_visibility() {
        let card = Card::new(Suit::Spade, Rank::QUEEN);
        assert!(!card.face_up);
        assert!(card.revealed().face_up);
        assert!(card.same_face(&card.revealed()));
        assert_ne!(card, card.revealed());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Spade, Rank::ACE).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Heart, Rank::TEN).to_string(), "10♥");
        assert_eq!(Card::joker().to_string(), "Joker");
    }
}
