//! ICRPG character sheets for Roll Keeper.
//!
//! Defines the stored character record, its derived values (ability
//! totals, effort dice, armor), the health and mastery rules that the
//! sheet enforces, list and numeric editing helpers, and a store that
//! keeps every sheet in one JSON array on disk.

/// The character record and its check rolls.
pub mod character;
/// Store configuration.
pub mod config;
/// Numeric edit targets for sheet forms.
pub mod edit;
/// Error types used throughout the crate.
pub mod error;
/// Supported tabletop game systems.
pub mod game;
/// Hit points, the death counter, and death saves.
pub mod health;
/// Ordered text and gear lists.
pub mod list;
/// Mastery point tracking.
pub mod mastery;
/// Ability scores, effort, and loot bonuses.
pub mod stats;
/// JSON-file persistence for character sheets.
pub mod store;

pub use character::{Character, CheckRoll, SheetId};
pub use config::StoreConfig;
pub use edit::{EditApplied, EditTarget, NumberEdit};
pub use error::{SheetError, SheetResult};
pub use game::TableTopGame;
pub use health::{DeathSave, HitPoints};
pub use list::{Gear, ItemList, ListEntry, NoteList};
pub use mastery::{Mastery, MasteryChange};
pub use stats::{Ability, AbilityScores, Effort, EffortScores, LootBonuses};
pub use store::SheetStore;
