//! Interactive dice-roller session.
//!
//! `RollerSession` holds the pool being assembled, the bonus, and the
//! roll history. Each roll runs one reducer over the pool and prepends
//! its description to the history.

use rand::rngs::StdRng;

use crate::config::RollerConfig;
use crate::dice::{DicePool, Die, ROLLER_FACES, parse_pool};
use crate::error::{DiceError, DiceResult};
use crate::history::RollHistory;
use crate::random::seeded_rng;
use crate::reduce::{PoolOutcome, RollMode};

const HELP: &str = "\
Commands:
  add <dice>     add dice to the pool (e.g. add 2d6 d20 coin)
  remove <n>     remove the n-th die from the pool
  clear          empty the pool
  bonus <n>      set the value added to numeric rolls
  sum            roll the pool and add the dice
  high           roll the pool and keep the highest die
  low            roll the pool and keep the lowest die
  pool           show the pool and bonus
  history        show recent rolls, newest first
  quit           leave the roller";

/// An interactive dice-roller session.
pub struct RollerSession {
    pool: DicePool,
    bonus: i64,
    history: RollHistory,
    last: Option<PoolOutcome>,
    rng: StdRng,
}

impl RollerSession {
    /// Create a new session from a configuration.
    pub fn new(config: RollerConfig) -> Self {
        Self {
            pool: DicePool::with_limit(config.pool_limit),
            bonus: 0,
            history: RollHistory::with_limit(config.history_limit),
            last: None,
            rng: seeded_rng(config.seed),
        }
    }

    /// The pool being assembled.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// The current bonus.
    pub fn bonus(&self) -> i64 {
        self.bonus
    }

    /// The roll history.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// The most recent roll, if any.
    pub fn last_outcome(&self) -> Option<&PoolOutcome> {
        self.last.as_ref()
    }

    /// Add a die to the pool.
    pub fn add(&mut self, die: Die) -> DiceResult<()> {
        self.pool.push_die(die)
    }

    /// Remove the die at `index` (zero-based) from the pool.
    pub fn remove(&mut self, index: usize) -> DiceResult<Die> {
        self.pool.remove(index).map(Die::from_sides)
    }

    /// Empty the pool.
    pub fn clear_pool(&mut self) {
        self.pool.clear();
    }

    /// Set the bonus directly.
    pub fn set_bonus(&mut self, bonus: i64) {
        self.bonus = bonus;
    }

    /// Set the bonus from user text. Non-numeric text keeps the old bonus.
    pub fn set_bonus_text(&mut self, text: &str) -> DiceResult<i64> {
        let trimmed = text.trim();
        match trimmed.strip_prefix('+').unwrap_or(trimmed).parse::<i64>() {
            Ok(bonus) => {
                self.bonus = bonus;
                Ok(bonus)
            }
            Err(_) => {
                tracing::warn!(input = text, kept = self.bonus, "rejected bonus edit");
                Err(DiceError::InvalidBonus(text.to_string()))
            }
        }
    }

    /// Roll the pool in `mode` and record it in the history.
    pub fn roll(&mut self, mode: RollMode) -> DiceResult<&PoolOutcome> {
        if self.pool.is_empty() {
            return Err(DiceError::EmptyPool);
        }
        let outcome = mode.roll(self.pool.faces(), self.bonus, &mut self.rng);
        self.history.push(outcome.description());
        Ok(&*self.last.insert(outcome))
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> DiceResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "add" => self.do_add(rest),
            "remove" | "rm" => self.do_remove(rest),
            "clear" => {
                self.clear_pool();
                Ok("Pool cleared.".to_string())
            }
            "bonus" => {
                let bonus = self.set_bonus_text(rest)?;
                Ok(format!("Bonus: {bonus:+}"))
            }
            "sum" | "roll" | "high" | "highest" | "low" | "lowest" => {
                let mode = cmd.parse::<RollMode>().unwrap_or(RollMode::Sum);
                self.do_roll(mode)
            }
            "pool" => Ok(self.describe_pool()),
            "history" => Ok(self.describe_history()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(DiceError::UnknownCommand(other.to_string())),
        }
    }

    fn do_add(&mut self, rest: &str) -> DiceResult<String> {
        let faces = parse_pool(rest)?;
        if faces.is_empty() {
            return Err(DiceError::UnknownDie(rest.to_string()));
        }
        if let Some(&sides) = faces
            .iter()
            .find(|&&sides| !ROLLER_FACES.iter().any(|d| d.sides() == sides))
        {
            return Err(DiceError::NotOffered(Die::from_sides(sides)));
        }
        self.pool.extend_from(&faces)?;
        Ok(self.describe_pool())
    }

    fn do_remove(&mut self, rest: &str) -> DiceResult<String> {
        let position = rest
            .parse::<usize>()
            .map_err(|_| DiceError::IndexOutOfRange(0))?;
        let index = position
            .checked_sub(1)
            .ok_or(DiceError::IndexOutOfRange(position))?;
        let removed = self
            .remove(index)
            .map_err(|_| DiceError::IndexOutOfRange(position))?;
        Ok(format!("Removed {removed}. {}", self.describe_pool()))
    }

    fn do_roll(&mut self, mode: RollMode) -> DiceResult<String> {
        let outcome = self.roll(mode)?;
        Ok(format!("{}\n  {}", outcome.headline(), outcome.description()))
    }

    fn describe_pool(&self) -> String {
        if self.pool.is_empty() {
            return format!("Pool: (empty), bonus {:+}", self.bonus);
        }
        format!(
            "Pool: {} ({}/{}), bonus {:+}",
            self.pool,
            self.pool.len(),
            self.pool.limit(),
            self.bonus
        )
    }

    fn describe_history(&self) -> String {
        if self.history.is_empty() {
            return "No rolls yet.".to_string();
        }
        self.history
            .entries()
            .enumerate()
            .map(|(i, entry)| format!("{:>2}. {entry}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
