//! Error types for the dice engine.
//!
//! The core roller and reducers never fail; these errors come from pool
//! building, input parsing, and the interactive session.

use thiserror::Error;

use crate::dice::Die;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors raised while building pools or driving a roller session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    /// The pool already holds the maximum number of dice.
    #[error("pool is full ({limit} dice max)")]
    PoolFull {
        /// The configured pool limit.
        limit: usize,
    },

    /// A die token could not be parsed.
    #[error("unknown die: {0}")]
    UnknownDie(String),

    /// The roller does not offer a die with this many faces.
    #[error("the roller has no {0} (offers coin, d4, d6, d8, d10, d12, d20, d100)")]
    NotOffered(Die),

    /// Bonus text was not a whole number.
    #[error("invalid bonus: {0}")]
    InvalidBonus(String),

    /// A pool index was outside the pool.
    #[error("no die at position {0}")]
    IndexOutOfRange(usize),

    /// A roll was requested with nothing in the pool.
    #[error("no dice to roll")]
    EmptyPool,

    /// The session did not recognise a command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A roll mode name was not recognised.
    #[error("unknown roll mode: {0} (expected sum, high, or low)")]
    UnknownMode(String),
}
