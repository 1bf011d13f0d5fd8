//! Core kernel types: seats, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every table.
//! Tables configure these via their config structs rather than modifying the core.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState, IndexSource};
pub use config::{
    AcePosition, StraightRule, SolitaireConfig, WarConfig, PokerConfig, BlackjackConfig, HighLowConfig,
};
pub use error::{RuleError, RuleResult};
