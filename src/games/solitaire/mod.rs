//! Klondike solitaire.
//!
//! Seven tableau columns, four foundations, a stock and its waste. The table
//! validates every move, turns up exposed tableau cards, recycles the waste,
//! and stops accepting moves once all four foundations run ace to king.

mod game;
mod moves;

pub use game::{GameStatus, Layout, SelectOutcome, SolitaireState, StockDraw, FOUNDATIONS, TABLEAU_COLUMNS};
pub use moves::{can_build_on_foundation, can_build_on_tableau, CardRef, Move};
