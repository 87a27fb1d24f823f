//! Sum reduction.
//!
//! Adds every numeric die and then the bonus. A coin-only pool reports a
//! heads/tails tally instead of a total.

use serde::{Deserialize, Serialize};

use crate::dice::PoolRoll;
use crate::random::RandomSource;

use super::{PoolScan, RollMode};

/// The result of summing a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumResult {
    /// Sum of the numeric dice plus the bonus; 0 for a coin flip.
    pub total: i64,
    /// Human-readable breakdown ending in the total or the coin tally.
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

impl SumResult {
    /// Number of coins that landed tails.
    pub fn num_tails(&self) -> usize {
        self.rolls.iter().filter(|r| r.is_tails()).count()
    }

    /// The total, or `Heads`/`Tails`/`Tie` by majority for a coin flip.
    pub fn headline(&self) -> String {
        if !self.coin_flip {
            return self.total.to_string();
        }
        let heads = self.num_heads as usize;
        match heads.cmp(&self.num_tails()) {
            std::cmp::Ordering::Greater => "Heads".to_string(),
            std::cmp::Ordering::Less => "Tails".to_string(),
            std::cmp::Ordering::Equal => "Tie".to_string(),
        }
    }
}

/// Roll every entry of `pool` once and sum the numeric dice.
pub fn dice_pool_sum<R: RandomSource + ?Sized>(
    pool: &[u32],
    bonus: i64,
    rng: &mut R,
) -> SumResult {
    let mut scan = PoolScan::run(RollMode::Sum, pool, rng);

    let total = if scan.coin_flip {
        let tally = format!("RESULT: {}H / {}T", scan.num_heads, scan.num_tails());
        scan.description.push_str(&tally);
        0
    } else {
        let total = scan.values().sum::<i64>() + bonus;
        scan.push_bonus(bonus);
        scan.description.push_str(&format!("TOTAL: {total}"));
        total
    };

    tracing::debug!(pool = ?pool, bonus, total, coin_flip = scan.coin_flip, "rolled pool sum");

    SumResult {
        total,
        description: scan.description,
        coin_flip: scan.coin_flip,
        num_heads: scan.num_heads,
        bonus,
        rolls: scan.rolls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;

    #[test]
    fn empty_pool_is_a_coin_flip() {
        let mut rng = Scripted::new(&[]);
        let r = dice_pool_sum(&[], 0, &mut rng);
        assert_eq!(r.total, 0);
        assert!(r.coin_flip);
        assert_eq!(r.num_heads, 0);
        assert_eq!(r.description, "SUM: RESULT: 0H / 0T");
    }

    #[test]
    fn sums_dice_and_bonus() {
        let mut rng = Scripted::new(&[4, 2]);
        let r = dice_pool_sum(&[6, 8], 3, &mut rng);
        assert_eq!(r.total, 9);
        assert!(!r.coin_flip);
        assert_eq!(r.description, "SUM: D6: 4, D8: 2, Added Value: 3, TOTAL: 9");
    }

    #[test]
    fn zero_bonus_has_no_added_value_fragment() {
        let mut rng = Scripted::new(&[5]);
        let r = dice_pool_sum(&[6], 0, &mut rng);
        assert_eq!(r.description, "SUM: D6: 5, TOTAL: 5");
    }

    #[test]
    fn negative_bonus() {
        let mut rng = Scripted::new(&[1]);
        let r = dice_pool_sum(&[4], -2, &mut rng);
        assert_eq!(r.total, -1);
        assert_eq!(r.description, "SUM: D4: 1, Added Value: -2, TOTAL: -1");
    }

    #[test]
    fn coins_do_not_count_toward_total() {
        let mut rng = Scripted::new(&[1, 6, 2]);
        let r = dice_pool_sum(&[2, 6, 2], 0, &mut rng);
        assert_eq!(r.total, 6);
        assert_eq!(r.num_heads, 1);
        assert!(!r.coin_flip);
        assert_eq!(
            r.description,
            "SUM: Coin: Heads, D6: 6, Coin: Tails, TOTAL: 6"
        );
    }

    #[test]
    fn coin_only_pool_ignores_bonus() {
        let mut rng = Scripted::new(&[1, 1, 2]);
        let r = dice_pool_sum(&[2, 2, 2], 5, &mut rng);
        assert!(r.coin_flip);
        assert_eq!(r.total, 0);
        assert_eq!(r.num_heads, 2);
        assert_eq!(
            r.description,
            "SUM: Coin: Heads, Coin: Heads, Coin: Tails, RESULT: 2H / 1T"
        );
        assert_eq!(r.headline(), "Heads");
    }

    #[test]
    fn coin_headline_tie_and_tails() {
        let mut rng = Scripted::new(&[1, 2]);
        let r = dice_pool_sum(&[2, 2], 0, &mut rng);
        assert_eq!(r.headline(), "Tie");

        let mut rng = Scripted::new(&[2]);
        let r = dice_pool_sum(&[2], 0, &mut rng);
        assert_eq!(r.headline(), "Tails");
    }

    #[test]
    fn degenerate_die_counts_as_one() {
        let mut rng = Scripted::new(&[]);
        let r = dice_pool_sum(&[1], 0, &mut rng);
        assert_eq!(r.total, 1);
        assert_eq!(r.description, "SUM: D1: 1, TOTAL: 1");
    }
}
