//! Mastery point tracking.
//!
//! Characters collect mastery points one at a time. Every 20 points
//! completes a mastery and the counter starts again from what is left over.

use serde::{Deserialize, Serialize};

/// Points needed to complete one mastery.
pub const POINTS_PER_MASTERY: i32 = 20;

/// Mastery block of a character record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mastery {
    /// Points towards the next mastery, `0..20`.
    pub current_count: i32,
    /// Masteries completed so far.
    pub masteries_completed: u32,
}

/// What an adjustment did to the mastery block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasteryChange {
    /// The count moved without crossing a mastery boundary.
    Counted,
    /// At least one mastery was completed.
    Completed,
    /// The count dropped below zero and gave back a completed mastery.
    Regressed,
}

impl Mastery {
    /// Add `delta` points (negative to remove), rolling over at 20.
    pub fn adjust(&mut self, delta: i32) -> MasteryChange {
        let mut value = self.current_count.saturating_add(delta);
        let mut change = MasteryChange::Counted;

        while value >= POINTS_PER_MASTERY {
            value -= POINTS_PER_MASTERY;
            self.masteries_completed += 1;
            change = MasteryChange::Completed;
        }
        while value < 0 {
            if self.masteries_completed == 0 {
                value = 0;
                break;
            }
            self.masteries_completed -= 1;
            value += POINTS_PER_MASTERY;
            change = MasteryChange::Regressed;
        }

        self.current_count = value;
        change
    }

    /// Move the count to `value`, applying the same roll-over rules.
    pub fn set_count(&mut self, value: i32) -> MasteryChange {
        self.adjust(value.saturating_sub(self.current_count))
    }
}

impl std::fmt::Display for Mastery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} (completed: {})",
            self.current_count, POINTS_PER_MASTERY, self.masteries_completed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up() {
        let mut m = Mastery::default();
        assert_eq!(m.adjust(1), MasteryChange::Counted);
        assert_eq!(m.current_count, 1);
        assert_eq!(m.masteries_completed, 0);
    }

    #[test]
    fn twentieth_point_completes() {
        let mut m = Mastery {
            current_count: 19,
            masteries_completed: 0,
        };
        assert_eq!(m.adjust(1), MasteryChange::Completed);
        assert_eq!(m.current_count, 0);
        assert_eq!(m.masteries_completed, 1);
    }

    #[test]
    fn going_negative_gives_back_a_mastery() {
        let mut m = Mastery {
            current_count: 0,
            masteries_completed: 2,
        };
        assert_eq!(m.adjust(-1), MasteryChange::Regressed);
        assert_eq!(m.current_count, 19);
        assert_eq!(m.masteries_completed, 1);
    }

    #[test]
    fn floor_at_zero_without_masteries() {
        let mut m = Mastery::default();
        assert_eq!(m.adjust(-3), MasteryChange::Counted);
        assert_eq!(m.current_count, 0);
    }

    #[test]
    fn large_jumps_roll_over_repeatedly() {
        let mut m = Mastery::default();
        assert_eq!(m.adjust(45), MasteryChange::Completed);
        assert_eq!((m.current_count, m.masteries_completed), (5, 2));
    }

    #[test]
    fn set_count() {
        let mut m = Mastery {
            current_count: 4,
            masteries_completed: 0,
        };
        assert_eq!(m.set_count(12), MasteryChange::Counted);
        assert_eq!(m.current_count, 12);
        assert_eq!(m.set_count(20), MasteryChange::Completed);
        assert_eq!((m.current_count, m.masteries_completed), (0, 1));
    }

    #[test]
    fn display() {
        let m = Mastery {
            current_count: 7,
            masteries_completed: 1,
        };
        assert_eq!(m.to_string(), "7/20 (completed: 1)");
    }
}
