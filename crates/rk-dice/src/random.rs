//! Uniform randomness for die rolls.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform die faces.
///
/// `draw(sides)` returns a value in `1..=sides` for `sides >= 2`, and `1`
/// for anything smaller (a degenerate die).
pub trait RandomSource {
    /// Draw one face of a die with `sides` faces.
    fn draw(&mut self, sides: u32) -> u32;
}

impl RandomSource for StdRng {
    fn draw(&mut self, sides: u32) -> u32 {
        if sides < 2 {
            return 1;
        }
        self.random_range(1..=sides)
    }
}

impl RandomSource for ThreadRng {
    fn draw(&mut self, sides: u32) -> u32 {
        if sides < 2 {
            return 1;
        }
        self.random_range(1..=sides)
    }
}

/// Build a `StdRng` from a fixed seed, or from OS entropy when `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// A source that replays a fixed list of draws, for deterministic tests.
#[cfg(test)]
pub(crate) struct Scripted {
    draws: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn draw(&mut self, sides: u32) -> u32 {
        if sides < 2 {
            return 1;
        }
        self.draws.pop_front().unwrap_or(1).clamp(1, sides)
    }
}
