//! Lowest-die reduction.
//!
//! Keeps the single lowest numeric die and adds the bonus to it. A
//! coin-only pool has no lowest value at all and reports `Heads` only if
//! every coin landed heads.

use serde::{Deserialize, Serialize};

use crate::dice::PoolRoll;
use crate::random::RandomSource;

use super::{PoolScan, RollMode};

/// The result of keeping the lowest die of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowestResult {
    /// Lowest numeric die plus the bonus; `None` when no numeric die was rolled.
    pub lowest: Option<i64>,
    /// Human-readable breakdown ending in the lowest value or coin verdict.
    pub description: String,
    /// True if the pool held no numeric dice.
    pub coin_flip: bool,
    /// Number of coins that landed heads.
    pub num_heads: u32,
    /// The bonus that was requested.
    pub bonus: i64,
    /// Per-entry outcomes in pool order.
    pub rolls: Vec<PoolRoll>,
}

impl LowestResult {
    /// The lowest value, or `Heads` only if every coin landed heads.
    pub fn headline(&self) -> String {
        match self.lowest {
            Some(lowest) => lowest.to_string(),
            None if self.num_heads as usize == self.rolls.len() => "Heads".to_string(),
            None => "Tails".to_string(),
        }
    }
}

/// Roll every entry of `pool` once and keep the lowest numeric die.
pub fn dice_pool_lowest<R: RandomSource + ?Sized>(
    pool: &[u32],
    bonus: i64,
    rng: &mut R,
) -> LowestResult {
    let mut scan = PoolScan::run(RollMode::Lowest, pool, rng);

    let min = scan.values().min();
    let lowest = match min {
        Some(min) => {
            let lowest = min + bonus;
            scan.push_bonus(bonus);
            scan.description.push_str(&format!("LOWEST: {lowest}"));
            Some(lowest)
        }
        None => {
            let all_heads = scan.num_tails() == 0;
            scan.push_verdict(all_heads);
            None
        }
    };

    tracing::debug!(pool = ?pool, bonus, ?lowest, coin_flip = scan.coin_flip, "rolled pool lowest");

    LowestResult {
        lowest,
        description: scan.description,
        coin_flip: scan.coin_flip,
        num_heads: scan.num_heads,
        bonus,
        rolls: scan.rolls,
    }
}
