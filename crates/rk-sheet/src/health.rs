//! Hit points, the death counter, and death saving throws.
//!
//! When hit points fall to 0 or below, a d4 sets how many turns the
//! character has left. Each death save is a d20: a natural 20 revives the
//! character at 1 HP; anything else burns a turn.

use rk_dice::{RandomSource, roll};
use serde::{Deserialize, Serialize};

const DEATH_COUNTER_DIE: u32 = 4;
const DEATH_SAVE_DIE: u32 = 20;

/// Hit point block of a character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPoints {
    /// Current hit points; may be zero or negative.
    pub current: i32,
    /// Maximum hit points, never below 1.
    pub max: i32,
    /// Turns left on the death counter.
    #[serde(default)]
    pub death_count: u32,
}

impl Default for HitPoints {
    fn default() -> Self {
        Self {
            current: 10,
            max: 10,
            death_count: 0,
        }
    }
}

/// Outcome of a death saving throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeathSave {
    /// The character is above 0 HP; nothing was rolled.
    NotNeeded,
    /// Natural 20: back at 1 HP with the counter cleared.
    Revived {
        /// The d20 result.
        roll: u64,
    },
    /// The last turn ran out.
    Died {
        /// The d20 result.
        roll: u64,
    },
    /// Still bleeding out.
    StillDying {
        /// The d20 result.
        roll: u64,
        /// Turns left on the counter.
        turns_left: u32,
    },
}

impl std::fmt::Display for DeathSave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNeeded => write!(
                f,
                "Death saving throw is not needed: roll one only at or below 0 HP"
            ),
            Self::Revived { .. } => write!(
                f,
                "SUCCESS! Natural 20 on the death saving throw; revived at 1 HP"
            ),
            Self::Died { roll } => write!(f, "You have died! Death saving throw was {roll}"),
            Self::StillDying { roll, turns_left } => write!(
                f,
                "Still dying. Death saving throw was {roll}; {turns_left} turn(s) left to roll a natural 20"
            ),
        }
    }
}

impl HitPoints {
    /// Whether the character is at or below 0 HP.
    pub fn is_dying(&self) -> bool {
        self.current < 1
    }

    /// Set current hit points.
    ///
    /// Dropping below 1 rolls a d4 death counter, stores it, and returns it.
    pub fn set_current<R: RandomSource + ?Sized>(&mut self, value: i32, rng: &mut R) -> Option<u32> {
        self.current = value;
        if value >= 1 {
            return None;
        }
        let counter = u32::try_from(roll(DEATH_COUNTER_DIE, 1, rng)).unwrap_or(1);
        self.death_count = counter;
        tracing::debug!(current = value, counter, "death counter rolled");
        Some(counter)
    }

    /// Set maximum hit points; values below 1 become 1.
    pub fn set_max(&mut self, value: i32) {
        self.max = value.max(1);
    }

    /// Roll a death saving throw and apply it.
    pub fn death_save<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> DeathSave {
        if !self.is_dying() {
            return DeathSave::NotNeeded;
        }

        let save = roll(DEATH_SAVE_DIE, 1, rng);
        let outcome = if save == u64::from(DEATH_SAVE_DIE) {
            self.death_count = 0;
            self.current = 1;
            DeathSave::Revived { roll: save }
        } else if self.death_count < 2 {
            self.death_count = 1;
            DeathSave::Died { roll: save }
        } else {
            self.death_count -= 1;
            DeathSave::StillDying {
                roll: save,
                turns_left: self.death_count,
            }
        };
        tracing::debug!(?outcome, "death save");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_dice::seeded_rng;

    /// Always returns the same face.
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn draw(&mut self, sides: u32) -> u32 {
            self.0.clamp(1, sides.max(1))
        }
    }

    #[test]
    fn defaults() {
        let hp = HitPoints::default();
        assert_eq!((hp.current, hp.max, hp.death_count), (10, 10, 0));
    }

    #[test]
    fn positive_hp_rolls_nothing() {
        let mut hp = HitPoints::default();
        assert_eq!(hp.set_current(4, &mut Fixed(3)), None);
        assert_eq!(hp.current, 4);
        assert_eq!(hp.death_count, 0);
    }

    #[test]
    fn dropping_to_zero_rolls_a_d4() {
        let mut rng = seeded_rng(Some(9));
        for value in [0, -3] {
            let mut hp = HitPoints::default();
            let counter = hp.set_current(value, &mut rng).unwrap();
            assert!((1..=4).contains(&counter));
            assert_eq!(hp.death_count, counter);
            assert_eq!(hp.current, value);
        }
    }

    #[test]
    fn max_hp_floor() {
        let mut hp = HitPoints::default();
        hp.set_max(0);
        assert_eq!(hp.max, 1);
        hp.set_max(-5);
        assert_eq!(hp.max, 1);
        hp.set_max(14);
        assert_eq!(hp.max, 14);
    }

    #[test]
    fn death_save_refused_when_standing() {
        let mut hp = HitPoints::default();
        assert_eq!(hp.death_save(&mut Fixed(20)), DeathSave::NotNeeded);
        assert_eq!(hp.current, 10);
    }

    #[test]
    fn natural_twenty_revives() {
        let mut hp = HitPoints {
            current: -2,
            max: 10,
            death_count: 3,
        };
        assert_eq!(hp.death_save(&mut Fixed(20)), DeathSave::Revived { roll: 20 });
        assert_eq!(hp.current, 1);
        assert_eq!(hp.death_count, 0);
    }

    #[test]
    fn failed_save_counts_down() {
        let mut hp = HitPoints {
            current: 0,
            max: 10,
            death_count: 3,
        };
        assert_eq!(
            hp.death_save(&mut Fixed(7)),
            DeathSave::StillDying {
                roll: 7,
                turns_left: 2
            }
        );
        assert_eq!(
            hp.death_save(&mut Fixed(7)),
            DeathSave::StillDying {
                roll: 7,
                turns_left: 1
            }
        );
        assert_eq!(hp.death_save(&mut Fixed(7)), DeathSave::Died { roll: 7 });
        assert_eq!(hp.death_count, 1);
        assert_eq!(hp.current, 0);
    }

    #[test]
    fn display_messages() {
        assert!(DeathSave::Died { roll: 3 }.to_string().contains("died"));
        assert!(
            DeathSave::StillDying {
                roll: 5,
                turns_left: 2
            }
            .to_string()
            .contains("2 turn(s)")
        );
    }
}
