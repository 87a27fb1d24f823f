//! Pool reducers: roll every entry once and reduce the results.
//!
//! Three modes share one iteration over the pool:
//! - **Sum**: add every numeric die, then the bonus
//! - **Highest**: keep the single highest numeric die, then add the bonus
//! - **Lowest**: keep the single lowest numeric die, then add the bonus
//!
//! Two-sided entries are coins. They are counted as heads or tails and
//! never feed the numeric result. A pool with no numeric die is reported
//! as a coin flip instead of a number.

pub mod highest;
pub mod lowest;
pub mod sum;

pub use highest::{HighestResult, dice_pool_highest};
pub use lowest::{LowestResult, dice_pool_lowest};
pub use sum::{SumResult, dice_pool_sum};

use serde::{Deserialize, Serialize};

use crate::dice::{CoinFace, PoolRoll, is_coin};
use crate::error::DiceError;
use crate::random::RandomSource;

/// Which reduction to apply to a rolled pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    /// Add every die.
    #[default]
    Sum,
    /// Keep the highest die.
    Highest,
    /// Keep the lowest die.
    Lowest,
}

impl RollMode {
    /// The upper-case label that opens a roll description.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Highest => "HIGHEST",
            Self::Lowest => "LOWEST",
        }
    }

    /// Roll `pool` in this mode.
    pub fn roll<R: RandomSource + ?Sized>(
        self,
        pool: &[u32],
        bonus: i64,
        rng: &mut R,
    ) -> PoolOutcome {
        match self {
            Self::Sum => PoolOutcome::Sum(dice_pool_sum(pool, bonus, rng)),
            Self::Highest => PoolOutcome::Highest(dice_pool_highest(pool, bonus, rng)),
            Self::Lowest => PoolOutcome::Lowest(dice_pool_lowest(pool, bonus, rng)),
        }
    }
}

impl std::str::FromStr for RollMode {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" | "total" => Ok(Self::Sum),
            "high" | "highest" => Ok(Self::Highest),
            "low" | "lowest" => Ok(Self::Lowest),
            other => Err(DiceError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sum => write!(f, "sum"),
            Self::Highest => write!(f, "highest"),
            Self::Lowest => write!(f, "lowest"),
        }
    }
}

/// The result of rolling a pool in any mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PoolOutcome {
    /// A sum-mode roll.
    Sum(SumResult),
    /// A highest-mode roll.
    Highest(HighestResult),
    /// A lowest-mode roll.
    Lowest(LowestResult),
}

impl PoolOutcome {
    /// The mode this outcome was rolled in.
    pub fn mode(&self) -> RollMode {
        match self {
            Self::Sum(_) => RollMode::Sum,
            Self::Highest(_) => RollMode::Highest,
            Self::Lowest(_) => RollMode::Lowest,
        }
    }

    /// The human-readable description of the roll.
    pub fn description(&self) -> &str {
        match self {
            Self::Sum(r) => &r.description,
            Self::Highest(r) => &r.description,
            Self::Lowest(r) => &r.description,
        }
    }

    /// True if the pool held no numeric dice.
    pub fn coin_flip(&self) -> bool {
        match self {
            Self::Sum(r) => r.coin_flip,
            Self::Highest(r) => r.coin_flip,
            Self::Lowest(r) => r.coin_flip,
        }
    }

    /// Number of coins that landed heads.
    pub fn num_heads(&self) -> u32 {
        match self {
            Self::Sum(r) => r.num_heads,
            Self::Highest(r) => r.num_heads,
            Self::Lowest(r) => r.num_heads,
        }
    }

    /// Per-entry outcomes in pool order.
    pub fn rolls(&self) -> &[PoolRoll] {
        match self {
            Self::Sum(r) => &r.rolls,
            Self::Highest(r) => &r.rolls,
            Self::Lowest(r) => &r.rolls,
        }
    }

    /// The headline value: the number, or the coin verdict.
    pub fn headline(&self) -> String {
        match self {
            Self::Sum(r) => r.headline(),
            Self::Highest(r) => r.headline(),
            Self::Lowest(r) => r.headline(),
        }
    }
}

/// The shared pass over a pool: rolls each entry once and writes the
/// per-entry description fragments.
pub(crate) struct PoolScan {
    pub(crate) rolls: Vec<PoolRoll>,
    pub(crate) description: String,
    pub(crate) num_heads: u32,
    pub(crate) coin_flip: bool,
}

impl PoolScan {
    pub(crate) fn run<R: RandomSource + ?Sized>(mode: RollMode, pool: &[u32], rng: &mut R) -> Self {
        let mut scan = Self {
            rolls: Vec::with_capacity(pool.len()),
            description: format!("{}: ", mode.label()),
            num_heads: 0,
            coin_flip: true,
        };

        for &sides in pool {
            let value = rng.draw(sides);
            let entry = if is_coin(sides) {
                let face = CoinFace::from_draw(u64::from(value));
                if face == CoinFace::Heads {
                    scan.num_heads += 1;
                }
                PoolRoll::Coin { face }
            } else {
                scan.coin_flip = false;
                PoolRoll::Die { sides, value }
            };
            scan.description.push_str(&format!("{entry}, "));
            scan.rolls.push(entry);
        }

        scan
    }

    /// Values of the numeric dice, in pool order.
    pub(crate) fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.rolls.iter().filter_map(|r| r.value()).map(i64::from)
    }

    /// Number of coins that landed tails.
    pub(crate) fn num_tails(&self) -> usize {
        self.rolls.iter().filter(|r| r.is_tails()).count()
    }

    /// Write the bonus fragment, if there is a bonus to show.
    pub(crate) fn push_bonus(&mut self, bonus: i64) {
        if bonus != 0 {
            self.description.push_str(&format!("Added Value: {bonus}, "));
        }
    }

    /// Close a coin-only description with a single verdict.
    pub(crate) fn push_verdict(&mut self, heads: bool) {
        let face = if heads { CoinFace::Heads } else { CoinFace::Tails };
        self.description.push_str(&format!("RESULT: {face}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;

    #[test]
    fn mode_from_str() {
        assert_eq!("sum".parse::<RollMode>(), Ok(RollMode::Sum));
        assert_eq!("HIGH".parse::<RollMode>(), Ok(RollMode::Highest));
        assert_eq!("lowest".parse::<RollMode>(), Ok(RollMode::Lowest));
        assert_eq!(
            "median".parse::<RollMode>(),
            Err(DiceError::UnknownMode("median".to_string()))
        );
    }

    #[test]
    fn mode_display_and_label() {
        assert_eq!(RollMode::Highest.to_string(), "highest");
        assert_eq!(RollMode::Lowest.label(), "LOWEST");
    }

    #[test]
    fn scan_writes_fragments_in_pool_order() {
        let mut rng = Scripted::new(&[4, 1, 2]);
        let scan = PoolScan::run(RollMode::Sum, &[6, 2, 2], &mut rng);
        assert_eq!(scan.description, "SUM: D6: 4, Coin: Heads, Coin: Tails, ");
        assert_eq!(scan.num_heads, 1);
        assert_eq!(scan.num_tails(), 1);
        assert!(!scan.coin_flip);
        assert_eq!(scan.values().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn outcome_accessors() {
        let mut rng = Scripted::new(&[3, 5]);
        let outcome = RollMode::Highest.roll(&[6, 8], 0, &mut rng);
        assert_eq!(outcome.mode(), RollMode::Highest);
        assert_eq!(outcome.headline(), "5");
        assert!(!outcome.coin_flip());
        assert_eq!(outcome.num_heads(), 0);
        assert_eq!(outcome.rolls().len(), 2);
        assert_eq!(outcome.description(), "HIGHEST: D6: 3, D8: 5, HIGHEST: 5");
    }

    #[test]
    fn reordering_changes_only_the_description() {
        let forward = [4, 6, 2, 8];
        let backward = [8, 2, 6, 4];
        let draws_forward = [3, 5, 1, 7];
        let draws_backward = [7, 1, 5, 3];

        for mode in [RollMode::Sum, RollMode::Highest, RollMode::Lowest] {
            let a = mode.roll(&forward, 2, &mut Scripted::new(&draws_forward));
            let b = mode.roll(&backward, 2, &mut Scripted::new(&draws_backward));
            assert_eq!(a.headline(), b.headline());
            assert_eq!(a.num_heads(), b.num_heads());
            assert_ne!(a.description(), b.description());
        }
    }
}
