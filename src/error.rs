//! Structured error types for webgrid.
//!
//! The surface is deliberately small: the prototype has no I/O failure
//! modes, so everything here is validation-level.

/// All errors that can occur in the grid core.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    /// A column with this name already exists in the registry.
    #[error("column already exists: {0}")]
    DuplicateColumn(String),

    /// The supplied column name was empty or whitespace-only.
    #[error("column name is empty")]
    EmptyColumnName,

    /// A row index past the end of the store.
    #[error("row {row} out of range (store has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
