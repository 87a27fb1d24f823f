//! Single-die rolls and per-entry pool outcomes.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Roll `count` dice with `sides` faces and return their sum.
///
/// A die with fewer than two sides always yields `1`, whatever the count.
/// A count of zero yields `0`.
pub fn roll<R: RandomSource + ?Sized>(sides: u32, count: u32, rng: &mut R) -> u64 {
    if sides < 2 {
        return 1;
    }
    (0..count).map(|_| u64::from(rng.draw(sides))).sum()
}

/// The face a coin landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFace {
    /// The coin's draw was 1.
    Heads,
    /// Any other draw.
    Tails,
}

impl CoinFace {
    /// Interpret a two-sided draw as a coin face.
    pub fn from_draw(value: u64) -> Self {
        if value == 1 { Self::Heads } else { Self::Tails }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "Heads"),
            Self::Tails => write!(f, "Tails"),
        }
    }
}

/// What a single pool entry produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolRoll {
    /// A numeric die and its value.
    Die {
        /// Face count of the die.
        sides: u32,
        /// The value rolled.
        value: u32,
    },
    /// A coin flip.
    Coin {
        /// The face it landed on.
        face: CoinFace,
    },
}

impl PoolRoll {
    /// The numeric value, if this entry was a die.
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Die { value, .. } => Some(*value),
            Self::Coin { .. } => None,
        }
    }

    /// Returns true if this entry was a coin that landed heads.
    pub fn is_heads(&self) -> bool {
        matches!(
            self,
            Self::Coin {
                face: CoinFace::Heads
            }
        )
    }

    /// Returns true if this entry was a coin that landed tails.
    pub fn is_tails(&self) -> bool {
        matches!(
            self,
            Self::Coin {
                face: CoinFace::Tails
            }
        )
    }
}

impl std::fmt::Display for PoolRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Die { sides, value } => write!(f, "D{sides}: {value}"),
            Self::Coin { face } => write!(f, "Coin: {face}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_roll_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let v = roll(20, 1, &mut rng);
            assert!((1..=20).contains(&v));
        }
    }

    #[test]
    fn degenerate_die_ignores_count() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(roll(1, 5, &mut rng), 1);
        assert_eq!(roll(0, 0, &mut rng), 1);
    }

    #[test]
    fn zero_count_sums_to_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(roll(6, 0, &mut rng), 0);
    }

    #[test]
    fn count_sums_draws() {
        let mut rng = Scripted::new(&[2, 5, 6]);
        assert_eq!(roll(6, 3, &mut rng), 13);
    }

    #[test]
    fn coin_face_from_draw() {
        assert_eq!(CoinFace::from_draw(1), CoinFace::Heads);
        assert_eq!(CoinFace::from_draw(2), CoinFace::Tails);
    }

    #[test]
    fn pool_roll_display() {
        let die = PoolRoll::Die { sides: 8, value: 3 };
        assert_eq!(die.to_string(), "D8: 3");
        assert_eq!(die.value(), Some(3));

        let coin = PoolRoll::Coin {
            face: CoinFace::Heads,
        };
        assert_eq!(coin.to_string(), "Coin: Heads");
        assert!(coin.is_heads());
        assert_eq!(coin.value(), None);
    }
}
