//! Where and how the sheet store writes its file.

use std::path::{Path, PathBuf};

/// Default store file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "characters.json";

/// Configuration for a [`SheetStore`](crate::store::SheetStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON file holding every sheet.
    pub path: PathBuf,
    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
            pretty: true,
        }
    }
}

impl StoreConfig {
    /// Set the store file path.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Choose between indented and compact JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
