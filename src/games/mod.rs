//! Table implementations built on the kernel.
//!
//! Solitaire and War are full engines with persistent state. The rest are
//! short rounds that deal, take one or two decisions, and settle.

pub mod solitaire;
pub mod war;
pub mod blackjack;
pub mod baccarat;
pub mod draw_poker;
pub mod high_low;
pub mod guess_card;
pub mod memory;
