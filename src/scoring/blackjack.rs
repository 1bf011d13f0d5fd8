//! Blackjack hand value.

use crate::cards::{Card, Rank};

/// Total that busts a hand when exceeded.
pub const BLACKJACK: u8 = 21;

/// Value of one card with the ace counted high.
#[must_use]
pub fn card_value(card: &Card) -> u8 {
    match card.rank {
        Rank::ACE => 11,
        rank if rank.is_face() => 10,
        rank => rank.value(),
    }
}

/// Best total for a hand.
///
/// Aces start at 11; while the total is over 21 and an 11-valued ace
/// remains, one ace drops to 1.
#[must_use]
pub fn blackjack_value(hand: &[Card]) -> u8 {
    let mut total: u32 = hand.iter().map(|c| u32::from(card_value(c))).sum();
    let mut soft_aces = hand.iter().filter(|c| c.rank == Rank::ACE).count();

    while total > u32::from(BLACKJACK) && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Two cards totalling 21.
#[must_use]
pub fn is_natural(hand: &[Card]) -> bool {
    hand.len() == 2 && blackjack_value(hand) == BLACKJACK
}

/// Total over 21.
#[must_use]
pub fn is_bust(hand: &[Card]) -> bool {
    blackjack_value(hand) > BLACKJACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(ranks: &[u8]) -> Vec<Card> {
        ranks
            .iter()
            .map(|&v| Card::new(Suit::Club, Rank::new(v).unwrap()))
            .collect()
    }

    #[test]
    fn test_ace_king_is_natural() {
        let h = hand(&[1, 13]);
        assert_eq!(blackjack_value(&h), 21);
        assert!(is_natural(&h));
    }

    #[test]
    fn test_soft_ace_drops() {
        assert_eq!(blackjack_value(&hand(&[1, 1])), 12);
        assert_eq!(blackjack_value(&hand(&[1, 9, 5])), 15);
        assert_eq!(blackjack_value(&hand(&[1, 1, 1, 1])), 14);
    }

    #[test]
    fn test_three_card_21_is_not_natural() {
        let h = hand(&[7, 7, 7]);
        assert_eq!(blackjack_value(&h), 21);
        assert!(!is_natural(&h));
    }

    #[test]
    fn test_bust_without_aces() {
        let h = hand(&[10, 12, 2]);
        assert_eq!(blackjack_value(&h), 22);
        assert!(is_bust(&h));
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(blackjack_value(&[]), 0);
    }
}
