//! Seat identification and per-seat data storage.
//!
//! ## Side
//!
//! Every two-handed table in this crate seats exactly two hands: the human
//! player and the house hand (War opponent, Blackjack dealer, Baccarat
//! banker). `Side` names them.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two hands at a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The house hand (opponent, dealer or banker).
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side of the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Slot index (player = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_tables::core::{Side, SideMap};
///
/// let mut cards: SideMap<usize> = SideMap::new(26, 26);
/// cards[Side::Opponent] -= 1;
/// assert_eq!(cards[Side::Player], 26);
/// assert_eq!(cards[Side::Opponent], 25);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit player and opponent values.
    pub fn new(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }

    #[test]
    fn test_side_map_indexing() {
        let mut map: SideMap<Vec<u8>> = SideMap::default();
        map[Side::Player].push(1);
        map[Side::Opponent].push(2);

        assert_eq!(map[Side::Player], vec![1]);
        assert_eq!(map[Side::Opponent], vec![2]);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new("p", "o");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &"p"), (Side::Opponent, &"o")]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(3, 4);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
