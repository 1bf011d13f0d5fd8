//! Rank ordering by table position.
//!
//! Games disagree about the ace. War compares raw ranks, so the ace is the
//! lowest card. High-or-Low uses the `2..K, A` table, so the ace is the
//! highest. Both go through [`rank_order`].

use std::cmp::Ordering;

use crate::cards::Rank;
use crate::core::AcePosition;

/// Position of `rank` in the table order selected by `ace`, 1-based.
///
/// With `AcePosition::Low` this is the raw rank (A = 1, K = 13). With
/// `AcePosition::High`, 2 = 1 up to K = 12 and A = 13.
#[must_use]
pub fn rank_order(rank: Rank, ace: AcePosition) -> u8 {
    match ace {
        AcePosition::Low => rank.value(),
        AcePosition::High if rank == Rank::ACE => 13,
        AcePosition::High => rank.value() - 1,
    }
}

/// Comparison key used by the War table (ace lowest).
#[must_use]
pub fn war_rank_order(rank: Rank) -> u8 {
    rank_order(rank, AcePosition::Low)
}

/// Compare two ranks by table position.
#[must_use]
pub fn compare_ranks(a: Rank, b: Rank, ace: AcePosition) -> Ordering {
    rank_order(a, ace).cmp(&rank_order(b, ace))
}
