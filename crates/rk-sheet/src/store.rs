//! JSON-file persistence for character sheets.
//!
//! Every sheet lives in one JSON array in a single file. Each write
//! replaces the whole array: the new contents go to a temporary sibling
//! file first and are then renamed over the old file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::character::{Character, SheetId};
use crate::config::StoreConfig;
use crate::error::{SheetError, SheetResult};
use crate::game::TableTopGame;

/// A character sheet store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct SheetStore {
    config: StoreConfig,
}

impl SheetStore {
    /// Open a store; the file is created on first write.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Every stored sheet, in file order. A missing or blank file is empty.
    pub fn load_all(&self) -> SheetResult<Vec<Character>> {
        let text = match fs::read_to_string(self.path()) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn write_all(&self, sheets: &[Character]) -> SheetResult<()> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(sheets)?
        } else {
            serde_json::to_string(sheets)?
        };

        if let Some(parent) = self.path().parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.path())?;

        tracing::info!(path = %self.path().display(), count = sheets.len(), "sheet store written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path().with_file_name(name)
    }

    /// Append a new sheet, giving it an id if it has none.
    pub fn create(&self, mut character: Character) -> SheetResult<Character> {
        let id = character.sheet_id.get_or_insert_with(SheetId::new_v4).clone();
        let mut sheets = self.load_all()?;
        sheets.push(character.clone());
        self.write_all(&sheets)?;
        tracing::debug!(%id, name = %character.name, "sheet created");
        Ok(character)
    }

    /// Replace the stored sheet that has the same id.
    pub fn save(&self, character: &Character) -> SheetResult<()> {
        let mut sheets = self.load_all()?;
        let slot = character
            .sheet_id
            .as_ref()
            .and_then(|id| sheets.iter_mut().find(|s| s.sheet_id.as_ref() == Some(id)))
            .ok_or_else(|| SheetError::NotFound(character.name.clone()))?;
        *slot = character.clone();
        self.write_all(&sheets)
    }

    /// Remove and return the first sheet of `game` that has id `sheet_id`,
    /// or, for sheets stored without an id, the name `name`.
    pub fn delete(
        &self,
        sheet_id: Option<&SheetId>,
        name: &str,
        game: TableTopGame,
    ) -> SheetResult<Character> {
        let mut sheets = self.load_all()?;
        let index = sheets
            .iter()
            .position(|s| {
                s.game == game
                    && match &s.sheet_id {
                        Some(id) => sheet_id == Some(id),
                        None => s.name == name,
                    }
            })
            .ok_or_else(|| SheetError::NotFound(name.to_string()))?;
        let removed = sheets.remove(index);
        self.write_all(&sheets)?;
        Ok(removed)
    }

    /// The sheet with id `sheet_id`, if stored.
    pub fn find(&self, sheet_id: &SheetId) -> SheetResult<Option<Character>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|s| s.sheet_id.as_ref() == Some(sheet_id)))
    }

    /// The first sheet whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> SheetResult<Option<Character>> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .load_all()?
            .into_iter()
            .find(|s| s.name.to_lowercase() == wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SheetStore {
        SheetStore::new(StoreConfig::default().with_path(dir.path().join("characters.json")))
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load_all().unwrap().is_empty());
    }

    #[test]
    fn blank_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load_all(), Err(SheetError::Json(_))));
    }

    #[test]
    fn create_assigns_id_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let vex = store.create(Character::new("Vex", "Gunslinger")).unwrap();
        let id = vex.sheet_id.clone().unwrap();
        assert!(matches!(id, SheetId::Uuid(_)));

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], vex);
        assert_eq!(store.find(&id).unwrap(), Some(vex));
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn save_replaces_by_id() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let mut vex = store.create(Character::new("Vex", "")).unwrap();
        store.create(Character::new("Ona", "")).unwrap();

        vex.coin = 40;
        store.save(&vex).unwrap();
        let found = store.find_by_name("VEX").unwrap().unwrap();
        assert_eq!(found.coin, 40);
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn save_unknown_sheet_fails() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let stray = Character::new("Stray", "");
        assert!(matches!(store.save(&stray), Err(SheetError::NotFound(_))));
    }

    #[test]
    fn delete_by_id_or_legacy_name() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let vex = store.create(Character::new("Vex", "")).unwrap();

        let legacy = Character::new("Old", "");
        let mut sheets = store.load_all().unwrap();
        sheets.push(legacy);
        store.write_all(&sheets).unwrap();

        assert!(
            store
                .delete(vex.sheet_id.as_ref(), "Vex", TableTopGame::DnD5e)
                .is_err()
        );
        store
            .delete(vex.sheet_id.as_ref(), "Vex", TableTopGame::Icrpg)
            .unwrap();
        // A sheet with an id is not matched by name alone.
        store.create(Character::new("Named", "")).unwrap();
        assert!(store.delete(None, "Named", TableTopGame::Icrpg).is_err());

        let old = store.delete(None, "Old", TableTopGame::Icrpg).unwrap();
        assert_eq!(old.name, "Old");
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn loads_and_updates_older_records() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(
            store.path(),
            r#"[{"sheetID": 4503599627370496.5, "gameID": 6, "createdDate": "3/7/2021",
                "portraitURI": "", "name": "Vex", "class": "Gunslinger", "bioForm": "",
                "story": "", "heroCoin": false,
                "hitPoints": {"current": 10, "max": 10, "deathCount": 0},
                "abilityScores": {"str": 0, "dex": 0, "con": 2, "int": 0, "wis": 0, "cha": 0},
                "effort": {"basic": 0, "weaponDamage": 0, "gunDamage": 0, "magicEffect": 0, "ultimate": 0},
                "lootBonuses": {"str": 0, "dex": 0, "con": 0, "int": 0, "wis": 0, "cha": 0,
                    "armor": 3, "basicEffort": 0, "weaponDamage": 0, "gunDamage": 0,
                    "magicEffect": 0, "ultimate": 0},
                "loot": [], "coin": 0, "abilities": [], "powers": [], "augments": [], "notes": [],
                "mastery": {"currentCount": 0, "masteriesCompleted": 0}}]"#,
        )
        .unwrap();

        let mut vex = store.find_by_name("vex").unwrap().unwrap();
        assert!(matches!(vex.sheet_id, Some(SheetId::Legacy(_))));
        assert_eq!(vex.game, TableTopGame::Icrpg);
        assert_eq!(vex.armor_total(), 5);

        vex.coin = 12;
        store.save(&vex).unwrap();
        store.create(Character::new("Ona", "")).unwrap();
        let stored: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(stored[0]["sheetID"].is_number());
        assert_eq!(stored[0]["gameID"], 6);
        assert_eq!(stored[0]["coin"], 12);
        assert!(stored[1]["sheetID"].is_string());

        store
            .delete(vex.sheet_id.as_ref(), "Vex", TableTopGame::Icrpg)
            .unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn compact_output() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::new(
            StoreConfig::default()
                .with_path(dir.path().join("nested/party.json"))
                .with_pretty(false),
        );
        store.create(Character::new("Vex", "")).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with("[{"));
    }
}
