//! Ability scores, effort, and loot bonuses.
//!
//! Every ability and effort value has a base score and a loot bonus; the
//! sheet shows and rolls with their sum.

use rk_dice::Die;
use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// One of the six ICRPG abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// STR.
    Strength,
    /// DEX.
    Dexterity,
    /// CON.
    Constitution,
    /// INT.
    Intelligence,
    /// WIS.
    Wisdom,
    /// CHA.
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Full name, used to label rolls.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Three-letter abbreviation.
    pub fn short(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl std::str::FromStr for Ability {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.short().eq_ignore_ascii_case(&lower) || a.label().to_lowercase() == lower)
            .ok_or_else(|| SheetError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short())
    }
}

/// One of the five effort categories, each rolled on its own die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    /// Basic effort (d4).
    Basic,
    /// Weapons and tools (d6).
    Weapons,
    /// Guns (d8).
    Guns,
    /// Magic effect (d10).
    Magic,
    /// Ultimate effort (d12).
    Ultimate,
}

impl Effort {
    /// All effort categories in sheet order.
    pub const ALL: [Effort; 5] = [
        Self::Basic,
        Self::Weapons,
        Self::Guns,
        Self::Magic,
        Self::Ultimate,
    ];

    /// Full name, used to label rolls.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Effort",
            Self::Weapons => "Weapons & Tools",
            Self::Guns => "Guns",
            Self::Magic => "Magic Effect",
            Self::Ultimate => "Ultimate",
        }
    }

    /// Short key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Weapons => "weapons",
            Self::Guns => "guns",
            Self::Magic => "magic",
            Self::Ultimate => "ultimate",
        }
    }

    /// The die this effort is rolled on.
    pub fn die(self) -> Die {
        match self {
            Self::Basic => Die::D4,
            Self::Weapons => Die::D6,
            Self::Guns => Die::D8,
            Self::Magic => Die::D10,
            Self::Ultimate => Die::D12,
        }
    }
}

impl std::str::FromStr for Effort {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "weapon" | "tools" => return Ok(Self::Weapons),
            "gun" => return Ok(Self::Guns),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|e| e.key() == lower || e.label().to_lowercase() == lower)
            .ok_or_else(|| SheetError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Base ability scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength.
    #[serde(rename = "str")]
    pub strength: i32,
    /// Dexterity.
    #[serde(rename = "dex")]
    pub dexterity: i32,
    /// Constitution.
    #[serde(rename = "con")]
    pub constitution: i32,
    /// Intelligence.
    #[serde(rename = "int")]
    pub intelligence: i32,
    /// Wisdom.
    #[serde(rename = "wis")]
    pub wisdom: i32,
    /// Charisma.
    #[serde(rename = "cha")]
    pub charisma: i32,
}

impl AbilityScores {
    /// Score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Mutable score for one ability.
    pub fn get_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }
}

/// Base effort scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffortScores {
    /// Basic effort.
    pub basic: i32,
    /// Weapons and tools.
    pub weapon_damage: i32,
    /// Guns.
    pub gun_damage: i32,
    /// Magic effect.
    pub magic_effect: i32,
    /// Ultimate effort.
    pub ultimate: i32,
}

impl EffortScores {
    /// Score for one effort category.
    pub fn get(&self, effort: Effort) -> i32 {
        match effort {
            Effort::Basic => self.basic,
            Effort::Weapons => self.weapon_damage,
            Effort::Guns => self.gun_damage,
            Effort::Magic => self.magic_effect,
            Effort::Ultimate => self.ultimate,
        }
    }

    /// Mutable score for one effort category.
    pub fn get_mut(&mut self, effort: Effort) -> &mut i32 {
        match effort {
            Effort::Basic => &mut self.basic,
            Effort::Weapons => &mut self.weapon_damage,
            Effort::Guns => &mut self.gun_damage,
            Effort::Magic => &mut self.magic_effect,
            Effort::Ultimate => &mut self.ultimate,
        }
    }
}

/// Bonuses granted by equipped loot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootBonuses {
    /// Ability bonuses, stored under the same keys as the base scores.
    #[serde(flatten)]
    pub abilities: AbilityScores,
    /// Armor bonus.
    pub armor: i32,
    /// Basic effort bonus.
    pub basic_effort: i32,
    /// Weapons and tools bonus.
    pub weapon_damage: i32,
    /// Guns bonus.
    pub gun_damage: i32,
    /// Magic effect bonus.
    pub magic_effect: i32,
    /// Ultimate effort bonus.
    pub ultimate: i32,
}

impl LootBonuses {
    /// Loot bonus for an ability.
    pub fn ability(&self, ability: Ability) -> i32 {
        self.abilities.get(ability)
    }

    /// Mutable loot bonus for an ability.
    pub fn ability_mut(&mut self, ability: Ability) -> &mut i32 {
        self.abilities.get_mut(ability)
    }

    /// Loot bonus for an effort category.
    pub fn effort(&self, effort: Effort) -> i32 {
        match effort {
            Effort::Basic => self.basic_effort,
            Effort::Weapons => self.weapon_damage,
            Effort::Guns => self.gun_damage,
            Effort::Magic => self.magic_effect,
            Effort::Ultimate => self.ultimate,
        }
    }

    /// Mutable loot bonus for an effort category.
    pub fn effort_mut(&mut self, effort: Effort) -> &mut i32 {
        match effort {
            Effort::Basic => &mut self.basic_effort,
            Effort::Weapons => &mut self.weapon_damage,
            Effort::Guns => &mut self.gun_damage,
            Effort::Magic => &mut self.magic_effect,
            Effort::Ultimate => &mut self.ultimate,
        }
    }
}
