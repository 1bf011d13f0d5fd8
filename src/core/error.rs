//! Error type shared by every table.
//!
//! Nothing in the kernel is fatal: a rejected operation leaves the state
//! untouched and reports one of these values to the caller, which decides how
//! to message the user.

use thiserror::Error;

/// Why an operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The move breaks a tableau or foundation rule, or names a card that
    /// cannot be picked up.
    #[error("invalid move: {reason}")]
    InvalidMove { reason: &'static str },

    /// A draw or move was attempted on an empty pile.
    #[error("nothing to take from {0}")]
    EmptySource(&'static str),

    /// The game already reached a terminal state.
    #[error("game is already over")]
    GameOver,

    /// A hand-built layout does not hold every card exactly once.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// The shoe ran out of cards mid-round.
    #[error("deck exhausted")]
    DeckExhausted,
}

impl RuleError {
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        RuleError::InvalidMove { reason }
    }
}

/// Result alias for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RuleError::invalid("king required").to_string(),
            "invalid move: king required"
        );
        assert_eq!(RuleError::EmptySource("stock").to_string(), "nothing to take from stock");
        assert_eq!(RuleError::GameOver.to_string(), "game is already over");
    }
}
