//! Ordered text lists (abilities, powers, augments, notes) and the gear list.
//!
//! Every list on the sheet supports the same editing operations, so they
//! live on [`ItemList`], implemented for any `Vec` of [`ListEntry`] values.

use serde::{Deserialize, Serialize};

use crate::error::{SheetError, SheetResult};

/// A piece of loot carried by the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gear {
    /// What the item is.
    pub item_description: String,
    /// Whether the item is equipped or just carried.
    #[serde(default)]
    pub equipped: bool,
}

impl Gear {
    /// A carried (not equipped) item.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            item_description: description.into(),
            equipped: false,
        }
    }
}

impl std::fmt::Display for Gear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = if self.equipped { "equipped" } else { "carried" };
        write!(f, "{} ({tag})", self.item_description)
    }
}

/// Which free-text list of a character to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteList {
    /// Special abilities.
    Abilities,
    /// Powers.
    Powers,
    /// Augments.
    Augments,
    /// General notes.
    Notes,
}

impl NoteList {
    /// All note lists in sheet order.
    pub const ALL: [NoteList; 4] = [Self::Abilities, Self::Powers, Self::Augments, Self::Notes];

    /// Heading shown above the list.
    pub fn title(self) -> &'static str {
        match self {
            Self::Abilities => "Abilities",
            Self::Powers => "Powers",
            Self::Augments => "Augments",
            Self::Notes => "Notes",
        }
    }
}

impl std::str::FromStr for NoteList {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ability" | "abilities" => Ok(Self::Abilities),
            "power" | "powers" => Ok(Self::Powers),
            "augment" | "augments" => Ok(Self::Augments),
            "note" | "notes" => Ok(Self::Notes),
            _ => Err(SheetError::UnknownField(s.to_string())),
        }
    }
}

/// An entry that is created from, and edited as, a line of text.
pub trait ListEntry {
    /// Build a new entry from its text.
    fn from_text(text: String) -> Self;
    /// Replace the entry's text, keeping anything else about it.
    fn set_text(&mut self, text: String);
}

impl ListEntry for String {
    fn from_text(text: String) -> Self {
        text
    }

    fn set_text(&mut self, text: String) {
        *self = text;
    }
}

impl ListEntry for Gear {
    fn from_text(text: String) -> Self {
        Gear::new(text)
    }

    fn set_text(&mut self, text: String) {
        self.item_description = text;
    }
}

/// Editing operations shared by every list on the sheet.
pub trait ItemList<T: ListEntry> {
    /// Append an entry. Blank text is rejected.
    fn add_text(&mut self, text: &str) -> SheetResult<()>;
    /// Replace the text of the entry at `index`.
    fn update_text(&mut self, index: usize, text: &str) -> SheetResult<()>;
    /// Swap the entry with the one above it; no-op for the first entry.
    fn move_up(&mut self, index: usize) -> SheetResult<()>;
    /// Swap the entry with the one below it; no-op for the last entry.
    fn move_down(&mut self, index: usize) -> SheetResult<()>;
    /// Remove and return the entry at `index`.
    fn remove_at(&mut self, index: usize) -> SheetResult<T>;
}

fn non_empty(text: &str) -> SheetResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SheetError::EmptyText);
    }
    Ok(text.to_string())
}

impl<T: ListEntry> ItemList<T> for Vec<T> {
    fn add_text(&mut self, text: &str) -> SheetResult<()> {
        self.push(T::from_text(non_empty(text)?));
        Ok(())
    }

    fn update_text(&mut self, index: usize, text: &str) -> SheetResult<()> {
        let text = non_empty(text)?;
        self.get_mut(index)
            .ok_or(SheetError::IndexOutOfRange(index))?
            .set_text(text);
        Ok(())
    }

    fn move_up(&mut self, index: usize) -> SheetResult<()> {
        if index >= self.len() {
            return Err(SheetError::IndexOutOfRange(index));
        }
        if index > 0 {
            self.swap(index, index - 1);
        }
        Ok(())
    }

    fn move_down(&mut self, index: usize) -> SheetResult<()> {
        if index >= self.len() {
            return Err(SheetError::IndexOutOfRange(index));
        }
        if index + 1 < self.len() {
            self.swap(index, index + 1);
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> SheetResult<T> {
        if index >= self.len() {
            return Err(SheetError::IndexOutOfRange(index));
        }
        Ok(self.remove(index))
    }
}

/// Flip the equipped flag of the gear at `index`, returning the new state.
pub fn toggle_equipped(gear: &mut [Gear], index: usize) -> SheetResult<bool> {
    let item = gear
        .get_mut(index)
        .ok_or(SheetError::IndexOutOfRange(index))?;
    item.equipped = !item.equipped;
    Ok(item.equipped)
}
