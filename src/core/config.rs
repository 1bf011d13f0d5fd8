//! Table configuration types.
//!
//! Each table takes a small config at construction time:
//! - `SolitaireConfig`: which optional Klondike moves are allowed
//! - `WarConfig`: stake size, ace ranking, optional round limit
//! - `PokerConfig`: how straights treat the ace
//! - `BlackjackConfig`: dealer standing total
//! - `HighLowConfig`: ace ranking for the guessing table
//!
//! Defaults are the house rules of each table.

use serde::{Deserialize, Serialize};

/// Where the ace sits when ranks are compared by table position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcePosition {
    /// `A < 2 < ... < K`.
    #[default]
    Low,
    /// `2 < ... < K < A`.
    High,
}

/// How straights are detected in five-card poker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StraightRule {
    /// Ranks sorted numerically (ace = 1) must be five consecutive integers.
    /// A straight flush containing an ace counts as a royal flush, so
    /// A-2-3-4-5 suited is royal and 10-J-Q-K-A is not a straight at all.
    #[default]
    Literal,
    /// Standard poker: the ace plays low (A-2-3-4-5) or high (10-J-Q-K-A),
    /// and only the ace-high straight flush is royal.
    AceHighOrLow,
}

/// Klondike options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolitaireConfig {
    /// Re-clicking the selected waste card sends it back onto the stock
    /// instead of only clearing the selection.
    pub return_waste_on_deselect: bool,

    /// Allow a face-up run to move between tableau columns.
    pub allow_run_moves: bool,

    /// Allow the top foundation card to come back down to the tableau.
    pub allow_foundation_return: bool,
}

impl Default for SolitaireConfig {
    fn default() -> Self {
        Self {
            return_waste_on_deselect: false,
            allow_run_moves: true,
            allow_foundation_return: true,
        }
    }
}

impl SolitaireConfig {
    /// Send a deselected waste card back to the stock.
    #[must_use]
    pub fn with_waste_return(mut self, enabled: bool) -> Self {
        self.return_waste_on_deselect = enabled;
        self
    }

    /// Enable or disable multi-card tableau moves.
    #[must_use]
    pub fn with_run_moves(mut self, enabled: bool) -> Self {
        self.allow_run_moves = enabled;
        self
    }

    /// Enable or disable foundation-to-tableau moves.
    #[must_use]
    pub fn with_foundation_return(mut self, enabled: bool) -> Self {
        self.allow_foundation_return = enabled;
        self
    }
}

/// War options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Face-down cards each side stakes before revealing the deciding card.
    pub stake_face_down: usize,

    /// Ace ranking used to compare revealed cards.
    pub ace: AcePosition,

    /// Stop after this many draws; the side holding more cards wins.
    pub round_limit: Option<u32>,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            stake_face_down: 3,
            ace: AcePosition::Low,
            round_limit: None,
        }
    }
}

impl WarConfig {
    /// Cards a side must still hold to fund one war escalation.
    #[must_use]
    pub fn cards_per_stake(&self) -> usize {
        self.stake_face_down + 1
    }

    /// Set the number of face-down stake cards.
    #[must_use]
    pub fn with_stake(mut self, face_down: usize) -> Self {
        self.stake_face_down = face_down;
        self
    }

    /// Set the ace ranking.
    #[must_use]
    pub fn with_ace(mut self, ace: AcePosition) -> Self {
        self.ace = ace;
        self
    }

    /// Cap the number of draws.
    #[must_use]
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }
}

/// Draw poker options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokerConfig {
    /// Straight detection rule.
    pub straights: StraightRule,
}

impl PokerConfig {
    /// Set the straight detection rule.
    #[must_use]
    pub fn with_straights(mut self, rule: StraightRule) -> Self {
        self.straights = rule;
        self
    }
}

/// Blackjack options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackConfig {
    /// The dealer keeps hitting while below this total.
    pub dealer_stands_on: u8,
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self { dealer_stands_on: 17 }
    }
}

impl BlackjackConfig {
    /// Set the dealer standing total.
    #[must_use]
    pub fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}

/// High-or-Low options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighLowConfig {
    /// Ace ranking used to compare consecutive cards.
    pub ace: AcePosition,
}

impl Default for HighLowConfig {
    fn default() -> Self {
        Self {
            ace: AcePosition::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_war_config_builder() {
        let config = WarConfig::default()
            .with_stake(2)
            .with_ace(AcePosition::High)
            .with_round_limit(500);

        assert_eq!(config.stake_face_down, 2);
        assert_eq!(config.cards_per_stake(), 3);
        assert_eq!(config.ace, AcePosition::High);
        assert_eq!(config.round_limit, Some(500));
    }

    #[test]
    fn test_defaults_match_house_rules() {
        assert_eq!(WarConfig::default().cards_per_stake(), 4);
        assert_eq!(WarConfig::default().ace, AcePosition::Low);
        assert_eq!(HighLowConfig::default().ace, AcePosition::High);
        assert_eq!(PokerConfig::default().straights, StraightRule::Literal);
        assert_eq!(BlackjackConfig::default().dealer_stands_on, 17);
        assert!(!SolitaireConfig::default().return_waste_on_deselect);
    }

    #[test]
    fn test_solitaire_config_builder() {
        let config = SolitaireConfig::default()
            .with_waste_return(true)
            .with_run_moves(false)
            .with_foundation_return(false);

        assert!(config.return_waste_on_deselect);
        assert!(!config.allow_run_moves);
        assert!(!config.allow_foundation_return);
    }

    #[test]
    fn test_config_serde() {
        let config = WarConfig::default().with_round_limit(10);
        let json = serde_json::to_string(&config).unwrap();
        let back: WarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
