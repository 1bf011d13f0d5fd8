//! Scoring and hand evaluation.
//!
//! Every function here is pure: it reads a hand snapshot and returns a
//! number or category, one family per table.

pub mod ranking;
pub mod blackjack;
pub mod baccarat;
pub mod poker;

pub use ranking::{compare_ranks, rank_order, war_rank_order};
pub use blackjack::{blackjack_value, is_bust, is_natural as is_blackjack_natural, BLACKJACK};
pub use baccarat::baccarat_points;
pub use poker::{evaluate_poker_hand, evaluate_with, HandCategory};
