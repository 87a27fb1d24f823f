//! Highest-die reduction.
//!
//! Keeps the single highest numeric die and adds the bonus to it. A
//! coin-only pool reports `Heads` if any coin landed heads.

use serde::{Deserialize, Serialize};

use crate::dice::PoolRoll;
use crate::random::RandomSource;

use super::{PoolScan, RollMode};

/// The result of keeping the highest die of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighestResult {
    /// Highest numeric die plus the bonus; 0 for a coin flip.
    pub highest: i64,
    /// Human-readable breakdown ending in the highest value or coin verdict.
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

impl HighestResult {
    /// The highest value, or `Heads` if any coin landed heads.
    pub fn headline(&self) -> String {
        if !self.coin_flip {
            self.highest.to_string()
        } else if self.num_heads > 0 {
            "Heads".to_string()
        } else {
            "Tails".to_string()
        }
    }
}

/// Roll every entry of `pool` once and keep the highest numeric die.
pub fn dice_pool_highest<R: RandomSource + ?Sized>(
    pool: &[u32],
    bonus: i64,
    rng: &mut R,
) -> HighestResult {
    let mut scan = PoolScan::run(RollMode::Highest, pool, rng);

    let highest = if scan.coin_flip {
        let any_heads = scan.num_heads > 0;
        scan.push_verdict(any_heads);
        0
    } else {
        let highest = scan.values().fold(0, i64::max) + bonus;
        scan.push_bonus(bonus);
        scan.description.push_str(&format!("HIGHEST: {highest}"));
        highest
    };

    tracing::debug!(pool = ?pool, bonus, highest, coin_flip = scan.coin_flip, "rolled pool highest");

    HighestResult {
        highest,
        description: scan.description,
        coin_flip: scan.coin_flip,
        num_heads: scan.num_heads,
        bonus,
        rolls: scan.rolls,
    }
}
