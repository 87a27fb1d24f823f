//! Supported tabletop game systems.

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// A tabletop game system a sheet belongs to, stored as its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TableTopGame {
    /// Starfinder.
    Starfinder,
    /// Pathfinder first edition.
    Pathfinder1e,
    /// Pathfinder second edition.
    Pathfinder2e,
    /// Dungeons & Dragons 3.5.
    DnD35,
    /// Dungeons & Dragons fourth edition.
    DnD4e,
    /// Dungeons & Dragons fifth edition.
    DnD5e,
    /// Index Card RPG.
    #[default]
    Icrpg,
}

impl TableTopGame {
    /// All known systems, ordered by numeric id.
    pub const ALL: [TableTopGame; 7] = [
        Self::Starfinder,
        Self::Pathfinder1e,
        Self::Pathfinder2e,
        Self::DnD35,
        Self::DnD4e,
        Self::DnD5e,
        Self::Icrpg,
    ];

    /// Numeric id of the system.
    pub fn id(self) -> u32 {
        match self {
            Self::Starfinder => 0,
            Self::Pathfinder1e => 1,
            Self::Pathfinder2e => 2,
            Self::DnD35 => 3,
            Self::DnD4e => 4,
            Self::DnD5e => 5,
            Self::Icrpg => 6,
        }
    }

    /// Look up a system by numeric id.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }

    /// Display name of a numeric id, or `UNDEFINED GAME`.
    pub fn name_for_id(id: u32) -> String {
        Self::from_id(id)
            .map(|g| g.to_string())
            .unwrap_or_else(|| "UNDEFINED GAME".to_string())
    }
}

impl From<TableTopGame> for u32 {
    fn from(game: TableTopGame) -> Self {
        game.id()
    }
}

impl TryFrom<u32> for TableTopGame {
    type Error = SheetError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(SheetError::UnknownGame(id))
    }
}

impl std::fmt::Display for TableTopGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Starfinder => write!(f, "Starfinder"),
            Self::Pathfinder1e => write!(f, "Pathfinder 1e"),
            Self::Pathfinder2e => write!(f, "Pathfinder 2e"),
            Self::DnD35 => write!(f, "D&D 3.5"),
            Self::DnD4e => write!(f, "D&D 4e"),
            Self::DnD5e => write!(f, "D&D 5e"),
            Self::Icrpg => write!(f, "ICRPG"),
        }
    }
}
