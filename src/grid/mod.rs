//! In-memory tabular store: ordered rows plus an append-only column
//! registry.
//!
//! Rows are created in bulk at startup and never deleted or reordered.
//! Columns only grow during a session; adding one backfills an empty
//! value on every existing row so that every row always has an entry
//! for every registered key.

pub mod filter;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{ColumnKey, Row};

/// Total number of rows created at startup (sample rows + empty padding).
pub const TOTAL_ROWS: usize = 100;

/// Columns present in the registry at startup, in display order.
pub const SEED_COLUMNS: [&str; 9] = [
    "Job Request",
    "Submitted",
    "Status",
    "Submitter",
    "URL",
    "Assigned",
    "Priority",
    "Due Date",
    "Est. Value",
];

/// Sample rows, one value per seed column.
const SAMPLE_ROWS: [[&str; 9]; 5] = [
    [
        "Launch social media campaign for product XYZ",
        "15-11-2024",
        "In-process",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "high",
        "20-11-2024",
        "6,200,000",
    ],
    [
        "Launch social media campaign for product XYZ",
        "15-11-2024",
        "Need to start",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "Medium",
        "20-11-2024",
        "6,200,000",
    ],
    [
        "Launch social media campaign for product XYZ",
        "15-11-2024",
        "Complete",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "Medium",
        "20-11-2024",
        "6,200,000",
    ],
    [
        "Launch social media campaign for product XYZ",
        "15-11-2024",
        "In-process",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "Medium",
        "20-11-2024",
        "6,200,000",
    ],
    [
        "Launch social media campaign for product XYZ",
        "15-11-2024",
        "Blocked",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "low",
        "20-11-2024",
        "6,200,000",
    ],
];

/// The tabular data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    /// Registered column keys in display order. The identifier column
    /// is rendered separately and never appears here.
    pub columns: Vec<ColumnKey>,
    /// Rows in creation order.
    pub rows: Vec<Row>,
}

impl GridData {
    /// An empty store with the given columns and `row_count` empty rows.
    pub fn new(columns: Vec<ColumnKey>, row_count: usize) -> Self {
        let rows = (0..row_count)
            .map(|i| Row::empty(u32::try_from(i + 1).unwrap_or(u32::MAX), &columns))
            .collect();
        Self { columns, rows }
    }

    /// The startup dataset: seed columns, five sample rows, empty rows
    /// padding out to [`TOTAL_ROWS`].
    pub fn sample() -> Self {
        let columns: Vec<ColumnKey> = SEED_COLUMNS.iter().map(|&c| c.to_string()).collect();
        let mut grid = Self::new(columns, TOTAL_ROWS);
        for (i, values) in SAMPLE_ROWS.iter().enumerate() {
            if let Some(row) = grid.rows.get_mut(i) {
                for (key, value) in SEED_COLUMNS.iter().zip(values.iter()) {
                    row.fields.insert((*key).to_string(), (*value).to_string());
                }
            }
        }
        grid
    }

    /// Number of rows in the store.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Value at `(row, key)`. Absent keys read as `""`.
    pub fn get(&self, row: usize, key: &str) -> Result<&str> {
        let r = self.rows.get(row).ok_or(GridError::RowOutOfRange {
            row,
            len: self.rows.len(),
        })?;
        Ok(r.value(key))
    }

    /// Replace the value at `(row, key)`. Any string is accepted,
    /// including empty; other fields and rows are untouched.
    pub fn set(&mut self, row: usize, key: &str, value: &str) -> Result<()> {
        let len = self.rows.len();
        let r = self
            .rows
            .get_mut(row)
            .ok_or(GridError::RowOutOfRange { row, len })?;
        r.fields.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Append a column named `name` (trimmed) and backfill `""` on every
    /// row. Rejects empty/whitespace names and case-sensitive duplicates;
    /// on rejection nothing changes.
    pub fn add_column(&mut self, name: &str) -> Result<ColumnKey> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GridError::EmptyColumnName);
        }
        if self.columns.iter().any(|c| c == name) {
            return Err(GridError::DuplicateColumn(name.to_string()));
        }
        let key: ColumnKey = name.to_string();
        for row in &mut self.rows {
            row.fields.insert(key.clone(), String::new());
        }
        self.columns.push(key.clone());
        Ok(key)
    }

    /// Key of the data column at registry index `col`.
    pub fn column_key(&self, col: usize) -> Option<&ColumnKey> {
        self.columns.get(col)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let grid = GridData::sample();
        assert_eq!(grid.row_count(), TOTAL_ROWS);
        assert_eq!(grid.columns.len(), SEED_COLUMNS.len());
        assert_eq!(grid.rows[0].id, 1);
        assert_eq!(grid.rows[99].id, 100);
        assert_eq!(grid.get(2, "Status").unwrap(), "Complete");
        assert_eq!(grid.get(50, "Status").unwrap(), "");
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = GridData::sample();
        assert_eq!(
            grid.get(TOTAL_ROWS, "Status"),
            Err(GridError::RowOutOfRange {
                row: TOTAL_ROWS,
                len: TOTAL_ROWS
            })
        );
    }

    #[test]
    fn test_set_updates_in_place() {
        let mut grid = GridData::sample();
        grid.set(0, "Status", "Blocked").unwrap();
        assert_eq!(grid.get(0, "Status").unwrap(), "Blocked");
        // Neighbors untouched
        assert_eq!(grid.get(0, "Priority").unwrap(), "high");
        assert_eq!(grid.get(1, "Status").unwrap(), "Need to start");
    }
}
