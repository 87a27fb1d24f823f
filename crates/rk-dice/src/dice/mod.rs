//! Die faces, pools, and single-die rolling.
//!
//! A die is identified by its face count. Two faces is special: it is a
//! coin, flipped for heads or tails, and never contributes to a numeric
//! result.

pub mod pool;
pub mod roll;

pub use pool::{DicePool, parse_pool};
pub use roll::{CoinFace, PoolRoll, roll};

use serde::{Deserialize, Serialize};

/// Face count that marks a pool entry as a coin flip.
pub const COIN_SIDES: u32 = 2;

/// The faces offered by the dice roller, in display order.
pub const ROLLER_FACES: [Die; 8] = [
    Die::Coin,
    Die::D4,
    Die::D6,
    Die::D8,
    Die::D10,
    Die::D12,
    Die::D20,
    Die::D100,
];

/// Returns true if a face count denotes a coin.
pub fn is_coin(sides: u32) -> bool {
    sides == COIN_SIDES
}

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Two-sided coin (heads on 1).
    Coin,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with any other number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::Coin => COIN_SIDES,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Map a face count back to a die.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            COIN_SIDES => Self::Coin,
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Returns true for the coin.
    pub fn is_coin(self) -> bool {
        is_coin(self.sides())
    }

    /// Parse a die from a tag like "d20", "D6", "20", or "coin".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "coin" {
            return Some(Self::Coin);
        }
        let digits = s.strip_prefix('d').unwrap_or(&s);
        let sides = digits.parse::<u32>().ok()?;
        if sides >= COIN_SIDES {
            Some(Self::from_sides(sides))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coin => write!(f, "coin"),
            other => write!(f, "d{}", other.sides()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::Coin.sides(), 2);
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::Custom(30).sides(), 30);
    }

    #[test]
    fn from_sides_round_trips_known_faces() {
        for die in ROLLER_FACES {
            assert_eq!(Die::from_sides(die.sides()), die);
        }
        assert_eq!(Die::from_sides(3), Die::Custom(3));
    }

    #[test]
    fn die_from_str() {
        assert_eq!(Die::from_str_tag("d20"), Some(Die::D20));
        assert_eq!(Die::from_str_tag("D6"), Some(Die::D6));
        assert_eq!(Die::from_str_tag("100"), Some(Die::D100));
        assert_eq!(Die::from_str_tag("coin"), Some(Die::Coin));
        assert_eq!(Die::from_str_tag("d2"), Some(Die::Coin));
        assert_eq!(Die::from_str_tag("d30"), Some(Die::Custom(30)));
        assert_eq!(Die::from_str_tag("d1"), None);
        assert_eq!(Die::from_str_tag("foo"), None);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::Coin.to_string(), "coin");
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::Custom(30).to_string(), "d30");
    }

    #[test]
    fn only_two_sides_is_a_coin() {
        assert!(is_coin(2));
        assert!(!is_coin(1));
        assert!(!is_coin(4));
        assert!(Die::Coin.is_coin());
        assert!(!Die::D6.is_coin());
    }
}
