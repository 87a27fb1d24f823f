//! Dice rolling engine for Roll Keeper.
//!
//! Provides a single-die roller, three pool reducers (sum, highest,
//! lowest) that treat two-sided entries as coin flips, a bounded roll
//! history, and an interactive roller session that ties them together.

pub mod config;
pub mod dice;
pub mod error;
pub mod history;
pub mod random;
pub mod reduce;
pub mod session;

pub use config::RollerConfig;
pub use dice::{CoinFace, DicePool, Die, PoolRoll, ROLLER_FACES, parse_pool, roll};
pub use error::{DiceError, DiceResult};
pub use history::RollHistory;
pub use random::{RandomSource, seeded_rng};
pub use reduce::{
    HighestResult, LowestResult, PoolOutcome, RollMode, SumResult, dice_pool_highest,
    dice_pool_lowest, dice_pool_sum,
};
pub use session::RollerSession;
