//! Baccarat point totals.

use crate::cards::Card;

/// Baccarat value of one card: ace (and joker) 1, faces 0, others their rank.
#[must_use]
pub fn card_points(card: &Card) -> u8 {
    if card.rank.is_face() {
        0
    } else {
        card.rank.value()
    }
}

/// Hand total modulo 10.
#[must_use]
pub fn baccarat_points(hand: &[Card]) -> u8 {
    let sum: u32 = hand.iter().map(|c| u32::from(card_points(c))).sum();
    (sum % 10) as u8
}

/// Two-card total of 8 or 9.
#[must_use]
pub fn is_natural(points: u8) -> bool {
    points >= 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_faces_are_zero() {
        let h = [Card::new(Suit::Heart, Rank::KING), Card::new(Suit::Spade, Rank::QUEEN)];
        assert_eq!(baccarat_points(&h), 0);
    }

    #[test]
    fn test_tens_wrap() {
        let h = [Card::new(Suit::Heart, Rank::TEN), Card::new(Suit::Spade, Rank::TEN)];
        assert_eq!(baccarat_points(&h), 0);
    }

    #[test]
    fn test_modulo() {
        let h = [
            Card::new(Suit::Heart, Rank::new(7).unwrap()),
            Card::new(Suit::Club, Rank::new(8).unwrap()),
        ];
        assert_eq!(baccarat_points(&h), 5);
    }

    #[test]
    fn test_joker_counts_as_ace() {
        let h = [Card::joker(), Card::new(Suit::Club, Rank::new(7).unwrap())];
        assert_eq!(baccarat_points(&h), 8);
        assert!(is_natural(baccarat_points(&h)));
    }
}
