//! Card model: cards, suits, ranks and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable suit/rank value plus an engine-owned face-up flag
//! - `Rank`: 1 (ace) to 13 (king)
//! - `Deck`: Ordered cards, top at the end
//!
//! ## Hands
//!
//! `Hand` is a small inline vector; most hands never exceed eight cards.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{new_deck, shuffle, shuffle_slice, Deck, STANDARD_DECK_SIZE};

/// An ordered hand of cards.
pub type Hand = smallvec::SmallVec<[Card; 8]>;
