//! Table trait shared by every game.
//!
//! Tables implement `CardGame` so callers can ask the same questions of any
//! of them:
//! - Has the game finished, and who won?
//! - How many cards does the table hold right now?

use crate::core::side::Side;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner. One-handed tables report `Side::Player` on a win.
    Winner(Side),
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Common surface of every table.
///
/// ## Implementation Notes
///
/// - `result`: Return `None` while the game continues
/// - `cards_in_play`: Every card the table owns, in any pile or hand; tables
///   with a fixed deck must keep this constant across operations
pub trait CardGame {
    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self) -> Option<GameResult>;

    /// Total cards owned by the table.
    fn cards_in_play(&self) -> usize;

    /// Convenience wrapper over `result`.
    fn is_terminal(&self) -> bool {
        self.result().is_some()
    }
}
