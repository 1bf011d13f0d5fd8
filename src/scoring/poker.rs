//! Five-card poker hand classification.
//!
//! Categories are checked in strictly descending priority, so a hand that is
//! both a flush and a straight is never reported below a straight flush.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::core::StraightRule;

/// Poker hand categories, weakest first so `Ord` follows hand strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Classify with the literal straight rule.
#[must_use]
pub fn evaluate_poker_hand(hand: &[Card; 5]) -> HandCategory {
    evaluate_with(hand, StraightRule::Literal)
}

/// Classify a five-card hand.
#[must_use]
pub fn evaluate_with(hand: &[Card; 5], rule: StraightRule) -> HandCategory {
    let mut ranks: SmallVec<[u8; 5]> = hand.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();

    let flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let consecutive = ranks.windows(2).all(|w| w[1] == w[0] + 1);
    let broadway = ranks.as_slice() == [1, 10, 11, 12, 13];
    let has_ace = ranks[0] == Rank::ACE.value();

    let (straight, royal) = match rule {
        StraightRule::Literal => (consecutive, flush && consecutive && has_ace),
        StraightRule::AceHighOrLow => (consecutive || broadway, flush && broadway),
    };

    let mut counts: FxHashMap<u8, u8> = FxHashMap::default();
    for rank in &ranks {
        *counts.entry(*rank).or_insert(0) += 1;
    }
    let has = |n: u8| counts.values().any(|&c| c == n);
    let pairs = counts.values().filter(|&&c| c == 2).count();

    if royal {
        HandCategory::RoyalFlush
    } else if flush && straight {
        HandCategory::StraightFlush
    } else if has(4) {
        HandCategory::FourOfAKind
    } else if has(3) && has(2) {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if has(3) {
        HandCategory::ThreeOfAKind
    } else if pairs == 2 {
        HandCategory::TwoPair
    } else if pairs == 1 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    }
}
