//! Error types for character sheets and the sheet store.

use thiserror::Error;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors that can occur while editing or storing character sheets.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Reading or writing the store file failed.
    #[error("sheet store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file did not hold a valid sheet array.
    #[error("sheet store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No sheet matched the request.
    #[error("character sheet not found: {0}")]
    NotFound(String),

    /// A numeric field was given text that is not a whole number.
    #[error("please enter a valid number for {field} (got '{input}')")]
    InvalidNumber {
        /// The field being edited.
        field: String,
        /// The rejected input.
        input: String,
    },

    /// A stored game id does not name a known game system.
    #[error("unknown game id: {0}")]
    UnknownGame(u32),

    /// A field name was not recognised.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A list index was outside the list.
    #[error("no entry at position {0}")]
    IndexOutOfRange(usize),

    /// List entries must have text.
    #[error("entry text cannot be empty")]
    EmptyText,
}
