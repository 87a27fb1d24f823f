//! The stored ICRPG character record.

use chrono::Local;
use rk_dice::{Die, RandomSource, roll};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::TableTopGame;
use crate::health::HitPoints;
use crate::list::{Gear, NoteList};
use crate::mastery::Mastery;
use crate::stats::{Ability, AbilityScores, Effort, EffortScores, LootBonuses};

/// A sheet's unique id.
///
/// New sheets get a UUID. Records saved by older versions carry a random
/// number instead, which is kept as-is so they can still be saved and
/// deleted by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetId {
    /// A UUID v4.
    Uuid(Uuid),
    /// A numeric id from an older record.
    Legacy(serde_json::Number),
}

impl SheetId {
    /// A fresh random id.
    pub fn new_v4() -> Self {
        Self::Uuid(Uuid::new_v4())
    }
}

impl std::fmt::Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid(id) => write!(f, "{id}"),
            Self::Legacy(n) => write!(f, "{n}"),
        }
    }
}

/// One character sheet, serialized with the record's camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique id; assigned by the store when missing.
    #[serde(rename = "sheetID", default)]
    pub sheet_id: Option<SheetId>,
    /// Game system the sheet belongs to.
    #[serde(rename = "gameID", default)]
    pub game: TableTopGame,
    /// Creation date as `d/m/yyyy`.
    #[serde(default)]
    pub created_date: String,
    /// Portrait image location.
    #[serde(rename = "portraitURI", default)]
    pub portrait_uri: String,
    /// Character name.
    pub name: String,
    /// Character class.
    #[serde(rename = "class", default)]
    pub class_name: String,
    /// Bio-form (ancestry).
    #[serde(default)]
    pub bio_form: String,
    /// Backstory.
    #[serde(default)]
    pub story: String,
    /// Whether the hero coin is held.
    #[serde(default)]
    pub hero_coin: bool,
    /// Hit points and death counter.
    #[serde(default)]
    pub hit_points: HitPoints,
    /// Stored armor value as last shown on the sheet.
    #[serde(default)]
    pub armor: i32,
    /// Base ability scores.
    #[serde(default)]
    pub ability_scores: AbilityScores,
    /// Base effort scores.
    #[serde(default)]
    pub effort: EffortScores,
    /// Loot bonuses.
    #[serde(default)]
    pub loot_bonuses: LootBonuses,
    /// Carried and equipped gear.
    #[serde(default)]
    pub loot: Vec<Gear>,
    /// Coin.
    #[serde(default)]
    pub coin: i64,
    /// Special abilities.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Powers.
    #[serde(default)]
    pub powers: Vec<String>,
    /// Augments.
    #[serde(default)]
    pub augments: Vec<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Mastery points.
    #[serde(default)]
    pub mastery: Mastery,
}

impl Character {
    /// A fresh ICRPG character dated today, 10/10 HP and all scores zero.
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            sheet_id: None,
            game: TableTopGame::Icrpg,
            created_date: Local::now().format("%-d/%-m/%Y").to_string(),
            portrait_uri: String::new(),
            name: name.into(),
            class_name: class_name.into(),
            bio_form: String::new(),
            story: String::new(),
            hero_coin: false,
            hit_points: HitPoints::default(),
            armor: 0,
            ability_scores: AbilityScores::default(),
            effort: EffortScores::default(),
            loot_bonuses: LootBonuses::default(),
            loot: Vec::new(),
            coin: 0,
            abilities: Vec::new(),
            powers: Vec::new(),
            augments: Vec::new(),
            notes: Vec::new(),
            mastery: Mastery::default(),
        }
    }

    /// Base plus loot for an ability.
    pub fn ability_total(&self, ability: Ability) -> i32 {
        self.ability_scores.get(ability) + self.loot_bonuses.ability(ability)
    }

    /// Base plus loot for an effort category.
    pub fn effort_total(&self, effort: Effort) -> i32 {
        self.effort.get(effort) + self.loot_bonuses.effort(effort)
    }

    /// CON total plus loot armor.
    pub fn armor_total(&self) -> i32 {
        self.ability_total(Ability::Constitution) + self.loot_bonuses.armor
    }

    /// Roll a d20 ability check.
    pub fn check<R: RandomSource + ?Sized>(&self, ability: Ability, rng: &mut R) -> CheckRoll {
        CheckRoll::roll(ability.label(), Die::D20, self.ability_total(ability), rng)
    }

    /// Roll an effort die.
    pub fn effort_roll<R: RandomSource + ?Sized>(&self, effort: Effort, rng: &mut R) -> CheckRoll {
        CheckRoll::roll(effort.label(), effort.die(), self.effort_total(effort), rng)
    }

    /// Roll a d20 armor check with the CON total.
    pub fn armor_check<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CheckRoll {
        CheckRoll::roll(
            "Armor",
            Die::D20,
            self.ability_total(Ability::Constitution),
            rng,
        )
    }

    /// One of the free-text lists.
    pub fn list(&self, which: NoteList) -> &[String] {
        match which {
            NoteList::Abilities => &self.abilities,
            NoteList::Powers => &self.powers,
            NoteList::Augments => &self.augments,
            NoteList::Notes => &self.notes,
        }
    }

    /// One of the free-text lists, for editing.
    pub fn list_mut(&mut self, which: NoteList) -> &mut Vec<String> {
        match which {
            NoteList::Abilities => &mut self.abilities,
            NoteList::Powers => &mut self.powers,
            NoteList::Augments => &mut self.augments,
            NoteList::Notes => &mut self.notes,
        }
    }
}

/// A single die plus modifier, as rolled from the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRoll {
    /// What was rolled, e.g. `Strength`.
    pub label: String,
    /// Faces of the die.
    pub sides: u32,
    /// The natural die result.
    pub die: u64,
    /// Modifier added to the die.
    pub modifier: i32,
    /// Die plus modifier.
    pub total: i64,
}

impl CheckRoll {
    fn roll<R: RandomSource + ?Sized>(label: &str, die: Die, modifier: i32, rng: &mut R) -> Self {
        let sides = die.sides();
        let natural = roll(sides, 1, rng);
        let total = i64::try_from(natural).unwrap_or(i64::MAX) + i64::from(modifier);
        tracing::debug!(label, sides, natural, modifier, total, "sheet roll");
        Self {
            label: label.to_string(),
            sides,
            die: natural,
            modifier,
            total,
        }
    }

    /// `"<label> roll = <total>"`.
    pub fn title(&self) -> String {
        format!("{} roll = {}", self.label, self.total)
    }

    /// `"D<sides> result was <die> + <modifier>"`.
    pub fn detail(&self) -> String {
        format!(
            "D{} result was {} + {}",
            self.sides, self.die, self.modifier
        )
    }
}

impl std::fmt::Display for CheckRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title(), self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_dice::seeded_rng;

    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn draw(&mut self, sides: u32) -> u32 {
            self.0.clamp(1, sides.max(1))
        }
    }

    fn hero() -> Character {
        let mut c = Character::new("Vex", "Gunslinger");
        c.ability_scores.constitution = 2;
        c.loot_bonuses.abilities.constitution = 1;
        c.loot_bonuses.armor = 3;
        c.ability_scores.strength = 4;
        c.effort.gun_damage = 1;
        c.loot_bonuses.gun_damage = 2;
        c
    }

    #[test]
    fn new_character_defaults() {
        let c = Character::new("Vex", "Gunslinger");
        assert_eq!(c.game, TableTopGame::Icrpg);
        assert_eq!(c.hit_points, HitPoints::default());
        assert_eq!(c.sheet_id, None);
        assert_eq!(c.created_date.split('/').count(), 3);
        assert_eq!(c.ability_total(Ability::Wisdom), 0);
    }

    #[test]
    fn derived_totals() {
        let c = hero();
        assert_eq!(c.ability_total(Ability::Constitution), 3);
        assert_eq!(c.effort_total(Effort::Guns), 3);
        assert_eq!(c.armor_total(), 6);
    }

    #[test]
    fn check_rolls_d20_plus_total() {
        let roll = hero().check(Ability::Strength, &mut Fixed(11));
        assert_eq!(roll.sides, 20);
        assert_eq!(roll.die, 11);
        assert_eq!(roll.total, 15);
        assert_eq!(roll.title(), "Strength roll = 15");
        assert_eq!(roll.detail(), "D20 result was 11 + 4");
    }

    #[test]
    fn effort_uses_its_die() {
        let mut rng = seeded_rng(Some(3));
        let roll = hero().effort_roll(Effort::Guns, &mut rng);
        assert_eq!(roll.sides, 8);
        assert!((1..=8).contains(&roll.die));
        assert_eq!(roll.total, i64::try_from(roll.die).unwrap() + 3);
    }

    #[test]
    fn armor_check_uses_con_total() {
        let roll = hero().armor_check(&mut Fixed(20));
        assert_eq!(roll.to_string(), "Armor roll = 23\nD20 result was 20 + 3");
    }

    #[test]
    fn record_keys() {
        let json = serde_json::to_value(hero()).unwrap();
        for key in [
            "sheetID",
            "gameID",
            "createdDate",
            "portraitURI",
            "class",
            "bioForm",
            "heroCoin",
            "hitPoints",
            "abilityScores",
            "lootBonuses",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["hitPoints"]["deathCount"], 0);
        assert_eq!(json["abilityScores"]["con"], 2);
        assert_eq!(json["mastery"]["currentCount"], 0);
    }

    #[test]
    fn game_is_stored_as_its_numeric_id() {
        let json = serde_json::to_value(hero()).unwrap();
        assert_eq!(json["gameID"], 6);
        assert!(json["sheetID"].is_null());
    }

    #[test]
    fn older_record_with_numeric_ids() {
        let c: Character = serde_json::from_str(
            r#"{"sheetID": 3217948120531.75, "gameID": 6, "name": "Vex",
                "hitPoints": {"current": 7, "max": 12, "deathCount": 0}}"#,
        )
        .unwrap();
        assert!(matches!(c.sheet_id, Some(SheetId::Legacy(_))));
        assert_eq!(c.game, TableTopGame::Icrpg);
        assert_eq!(c.hit_points.current, 7);

        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["sheetID"], serde_json::json!(3217948120531.75));
        assert_eq!(back["gameID"], 6);
    }

    #[test]
    fn uuid_sheet_id_round_trips() {
        let id = SheetId::new_v4();
        let text = serde_json::to_string(&id).unwrap();
        assert_eq!(serde_json::from_str::<SheetId>(&text).unwrap(), id);
        assert_eq!(text.trim_matches('"'), id.to_string());
    }

    #[test]
    fn sparse_record_fills_defaults() {
        let c: Character = serde_json::from_str(r#"{"name":"Old"}"#).unwrap();
        assert_eq!(c.name, "Old");
        assert_eq!(c.hit_points.max, 10);
        assert!(c.loot.is_empty());
    }

    #[test]
    fn lists_by_kind() {
        let mut c = Character::new("Vex", "");
        c.list_mut(NoteList::Powers).push("Blink".into());
        assert_eq!(c.list(NoteList::Powers), ["Blink".to_string()]);
        assert!(c.list(NoteList::Notes).is_empty());
    }
}
