use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key of a data column. Non-empty, unique within the registry;
/// display order is the registry's insertion order.
pub type ColumnKey = String;

/// A single row: a stable 1-based identifier plus one value per
/// registered column.
///
/// Invariant: `fields` contains an entry (possibly `""`) for every key
/// currently in the column registry. `GridData::add_column` backfills
/// existing rows to keep this true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// 1-based identifier, assigned at creation and never reused.
    pub id: u32,
    /// Column key -> cell value.
    pub fields: HashMap<ColumnKey, String>,
}

impl Row {
    /// Create a row with an empty value for each of `columns`.
    pub fn empty(id: u32, columns: &[ColumnKey]) -> Self {
        Self {
            id,
            fields: columns.iter().map(|c| (c.clone(), String::new())).collect(),
        }
    }

    /// Value for `key`, or `""` if the key is absent.
    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }
}
