//! Dice pool construction.

use crate::error::{DiceError, DiceResult};
use crate::random::RandomSource;
use crate::reduce::{HighestResult, LowestResult, SumResult};

use super::{Die, is_coin};

/// Default maximum number of dice in a pool.
pub const DEFAULT_POOL_LIMIT: usize = 20;

/// An ordered, bounded collection of face counts to roll together.
///
/// Entries with two faces are coins. Insertion order only affects the
/// order of fragments in a roll description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicePool {
    faces: Vec<u32>,
    limit: usize,
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}

impl DicePool {
    /// Create an empty pool with the default limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_POOL_LIMIT)
    }

    /// Create an empty pool holding at most `limit` dice (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            faces: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Append a die with `sides` faces. Fails once the pool is full.
    pub fn push(&mut self, sides: u32) -> DiceResult<()> {
        if self.is_full() {
            return Err(DiceError::PoolFull { limit: self.limit });
        }
        self.faces.push(sides);
        Ok(())
    }

    /// Append every face count in `faces`, or none of them if they do not
    /// all fit.
    pub fn extend_from(&mut self, faces: &[u32]) -> DiceResult<()> {
        if self.faces.len() + faces.len() > self.limit {
            return Err(DiceError::PoolFull { limit: self.limit });
        }
        self.faces.extend_from_slice(faces);
        Ok(())
    }

    /// Append a die by type.
    pub fn push_die(&mut self, die: Die) -> DiceResult<()> {
        self.push(die.sides())
    }

    /// Remove and return the face count at `index`.
    pub fn remove(&mut self, index: usize) -> DiceResult<u32> {
        if index >= self.faces.len() {
            return Err(DiceError::IndexOutOfRange(index));
        }
        Ok(self.faces.remove(index))
    }

    /// Remove every die.
    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// The face counts in insertion order.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Maximum number of dice this pool accepts.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns how many dice are in the pool.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns true if no more dice can be added.
    pub fn is_full(&self) -> bool {
        self.faces.len() >= self.limit
    }

    /// Returns true if every entry is a coin (vacuously true when empty).
    pub fn coin_only(&self) -> bool {
        self.faces.iter().all(|&s| is_coin(s))
    }

    /// Roll the pool and sum it.
    pub fn sum<R: RandomSource + ?Sized>(&self, bonus: i64, rng: &mut R) -> SumResult {
        crate::reduce::dice_pool_sum(&self.faces, bonus, rng)
    }

    /// Roll the pool and keep the highest die.
    pub fn highest<R: RandomSource + ?Sized>(&self, bonus: i64, rng: &mut R) -> HighestResult {
        crate::reduce::dice_pool_highest(&self.faces, bonus, rng)
    }

    /// Roll the pool and keep the lowest die.
    pub fn lowest<R: RandomSource + ?Sized>(&self, bonus: i64, rng: &mut R) -> LowestResult {
        crate::reduce::dice_pool_lowest(&self.faces, bonus, rng)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .faces
            .iter()
            .map(|&s| Die::from_sides(s).to_string())
            .collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Parse a pool description like `"2d6 d20 coin 3coin 8"` into face counts.
///
/// Tokens are separated by whitespace or commas. Each token is a die tag
/// (see [`Die::from_str_tag`]) with an optional leading repeat count.
pub fn parse_pool(input: &str) -> DiceResult<Vec<u32>> {
    let mut faces = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let (count, die) = parse_token(token)?;
        faces.extend(std::iter::repeat_n(die.sides(), count));
    }
    Ok(faces)
}

fn parse_token(token: &str) -> DiceResult<(usize, Die)> {
    let lower = token.to_lowercase();
    let split = lower
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(lower.len());
    let (count_part, die_part) = lower.split_at(split);

    // A bare number is a face count, not a repeat count.
    if die_part.is_empty() {
        return Die::from_str_tag(count_part)
            .map(|d| (1, d))
            .ok_or_else(|| DiceError::UnknownDie(token.to_string()));
    }

    let count = if count_part.is_empty() {
        1
    } else {
        count_part
            .parse::<usize>()
            .map_err(|_| DiceError::UnknownDie(token.to_string()))?
    };
    let die =
        Die::from_str_tag(die_part).ok_or_else(|| DiceError::UnknownDie(token.to_string()))?;
    Ok((count, die))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::COIN_SIDES;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.len(), 0);
        assert!(pool.is_empty());
        assert!(pool.coin_only());
        assert_eq!(pool.limit(), 20);
    }

    #[test]
    fn push_until_full() {
        let mut pool = DicePool::with_limit(2);
        pool.push(6).unwrap();
        pool.push_die(Die::D20).unwrap();
        assert!(pool.is_full());
        assert_eq!(pool.push(4), Err(DiceError::PoolFull { limit: 2 }));
        assert_eq!(pool.faces(), &[6, 20]);
    }

    #[test]
    fn extend_is_all_or_nothing() {
        let mut pool = DicePool::with_limit(3);
        pool.extend_from(&[4, 4]).unwrap();
        assert_eq!(pool.extend_from(&[6, 6]), Err(DiceError::PoolFull { limit: 3 }));
        assert_eq!(pool.faces(), &[4, 4]);
        pool.extend_from(&[6]).unwrap();
        assert!(pool.is_full());
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let pool = DicePool::with_limit(0);
        assert_eq!(pool.limit(), 1);
    }

    #[test]
    fn remove_by_index() {
        let mut pool = DicePool::new();
        pool.push(4).unwrap();
        pool.push(8).unwrap();
        assert_eq!(pool.remove(0), Ok(4));
        assert_eq!(pool.faces(), &[8]);
        assert_eq!(pool.remove(5), Err(DiceError::IndexOutOfRange(5)));
    }

    #[test]
    fn coin_only_detection() {
        let mut pool = DicePool::new();
        pool.push(COIN_SIDES).unwrap();
        pool.push(COIN_SIDES).unwrap();
        assert!(pool.coin_only());
        pool.push(6).unwrap();
        assert!(!pool.coin_only());
        pool.clear();
        assert!(pool.is_empty());
    }

    #[test]
    fn display_lists_dice() {
        let mut pool = DicePool::new();
        pool.push(2).unwrap();
        pool.push(20).unwrap();
        assert_eq!(pool.to_string(), "[coin, d20]");
    }

    #[test]
    fn parse_mixed_pool() {
        assert_eq!(
            parse_pool("2d6 d20, coin 8").unwrap(),
            vec![6, 6, 20, 2, 8]
        );
        assert_eq!(parse_pool("3coin").unwrap(), vec![2, 2, 2]);
        assert_eq!(parse_pool("").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse_pool("2d6 banana"),
            Err(DiceError::UnknownDie("banana".to_string()))
        );
        assert_eq!(parse_pool("1"), Err(DiceError::UnknownDie("1".to_string())));
    }
}
