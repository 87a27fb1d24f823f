//! Numeric edits typed into the sheet.
//!
//! A [`NumberEdit`] pairs the field being edited with the raw text the
//! user typed. Committing it parses the text and routes the value through
//! the same rules the sheet uses elsewhere: HP below 1 starts a death
//! counter, max HP never drops below 1, and mastery rolls over at 20.

use rk_dice::RandomSource;

use crate::character::Character;
use crate::error::{SheetError, SheetResult};
use crate::mastery::MasteryChange;
use crate::stats::{Ability, Effort};

/// A numeric field of the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Base ability score.
    AbilityBase(Ability),
    /// Loot bonus to an ability.
    AbilityLoot(Ability),
    /// Base effort score.
    EffortBase(Effort),
    /// Loot bonus to an effort category.
    EffortLoot(Effort),
    /// Current hit points.
    CurrentHp,
    /// Maximum hit points.
    MaxHp,
    /// Turns left on the death counter.
    DeathCount,
    /// Loot bonus to armor.
    ArmorLoot,
    /// Coin.
    Coin,
    /// Mastery point count.
    Mastery,
}

impl std::str::FromStr for EditTarget {
    type Err = SheetError;

    /// Accepts `str`, `str-loot`, `guns`, `guns-loot`, `hp`, `max-hp`,
    /// `death`, `armor-loot`, `coin` and `mastery`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        match key.as_str() {
            "hp" | "current-hp" => return Ok(Self::CurrentHp),
            "max-hp" | "maxhp" => return Ok(Self::MaxHp),
            "death" | "death-count" => return Ok(Self::DeathCount),
            "armor-loot" | "armor" => return Ok(Self::ArmorLoot),
            "coin" => return Ok(Self::Coin),
            "mastery" => return Ok(Self::Mastery),
            _ => {}
        }

        let (name, loot) = match key.strip_suffix("-loot") {
            Some(name) => (name, true),
            None => (key.as_str(), false),
        };
        if let Ok(ability) = name.parse::<Ability>() {
            return Ok(if loot {
                Self::AbilityLoot(ability)
            } else {
                Self::AbilityBase(ability)
            });
        }
        if let Ok(effort) = name.parse::<Effort>() {
            return Ok(if loot {
                Self::EffortLoot(effort)
            } else {
                Self::EffortBase(effort)
            });
        }
        Err(SheetError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for EditTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbilityBase(a) => write!(f, "{}", a.short().to_lowercase()),
            Self::AbilityLoot(a) => write!(f, "{}-loot", a.short().to_lowercase()),
            Self::EffortBase(e) => write!(f, "{}", e.key()),
            Self::EffortLoot(e) => write!(f, "{}-loot", e.key()),
            Self::CurrentHp => write!(f, "hp"),
            Self::MaxHp => write!(f, "max-hp"),
            Self::DeathCount => write!(f, "death"),
            Self::ArmorLoot => write!(f, "armor-loot"),
            Self::Coin => write!(f, "coin"),
            Self::Mastery => write!(f, "mastery"),
        }
    }
}

/// What committing an edit changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditApplied {
    /// The field that was written.
    pub target: EditTarget,
    /// The value stored after the sheet's rules were applied.
    pub value: i64,
    /// Death counter rolled because HP dropped below 1.
    pub death_counter: Option<u32>,
    /// Mastery roll-over caused by the edit.
    pub mastery: Option<MasteryChange>,
}

/// A pending numeric edit: the field and the typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberEdit {
    /// Field being edited.
    pub target: EditTarget,
    /// Raw text typed by the user.
    pub buffer: String,
}

impl NumberEdit {
    /// Start an edit of `target` with the typed text.
    pub fn new(target: EditTarget, buffer: impl Into<String>) -> Self {
        Self {
            target,
            buffer: buffer.into(),
        }
    }

    fn invalid(&self) -> SheetError {
        tracing::warn!(field = %self.target, input = %self.buffer, "rejected sheet edit");
        SheetError::InvalidNumber {
            field: self.target.to_string(),
            input: self.buffer.clone(),
        }
    }

    fn parse<T: std::str::FromStr>(&self) -> SheetResult<T> {
        let text = self.buffer.trim();
        text.strip_prefix('+')
            .unwrap_or(text)
            .parse()
            .map_err(|_| self.invalid())
    }

    /// Parse the buffer and write it into `character`.
    ///
    /// The character is untouched when the buffer is not a whole number.
    pub fn commit<R: RandomSource + ?Sized>(
        &self,
        character: &mut Character,
        rng: &mut R,
    ) -> SheetResult<EditApplied> {
        let mut applied = EditApplied {
            target: self.target,
            value: 0,
            death_counter: None,
            mastery: None,
        };

        applied.value = match self.target {
            EditTarget::Coin => {
                character.coin = self.parse()?;
                character.coin
            }
            EditTarget::DeathCount => {
                character.hit_points.death_count = self.parse()?;
                i64::from(character.hit_points.death_count)
            }
            EditTarget::AbilityBase(a) => {
                let slot = character.ability_scores.get_mut(a);
                *slot = self.parse()?;
                i64::from(*slot)
            }
            EditTarget::AbilityLoot(a) => {
                let slot = character.loot_bonuses.ability_mut(a);
                *slot = self.parse()?;
                i64::from(*slot)
            }
            EditTarget::EffortBase(e) => {
                let slot = character.effort.get_mut(e);
                *slot = self.parse()?;
                i64::from(*slot)
            }
            EditTarget::EffortLoot(e) => {
                let slot = character.loot_bonuses.effort_mut(e);
                *slot = self.parse()?;
                i64::from(*slot)
            }
            EditTarget::ArmorLoot => {
                character.loot_bonuses.armor = self.parse()?;
                i64::from(character.loot_bonuses.armor)
            }
            EditTarget::CurrentHp => {
                let value = self.parse()?;
                applied.death_counter = character.hit_points.set_current(value, rng);
                i64::from(character.hit_points.current)
            }
            EditTarget::MaxHp => {
                character.hit_points.set_max(self.parse()?);
                i64::from(character.hit_points.max)
            }
            EditTarget::Mastery => {
                applied.mastery = Some(character.mastery.set_count(self.parse()?));
                i64::from(character.mastery.current_count)
            }
        };

        character.armor = character.armor_total();
        Ok(applied)
    }
}
