//! Application state and its transition functions.
//!
//! `GridState` owns everything the presentation layer reads: the data
//! store, the filter query, and the selected/editing coordinates. All
//! transitions are total functions over well-formed input; out-of-range
//! navigation clamps instead of failing, so this module is fully
//! testable without any rendering framework.
//!
//! Selection machine, informally: idle (nothing selected), selected,
//! editing. Keyboard input applies only while selected and not editing;
//! every navigation key rewrites the selected coordinate even when it
//! did not move.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{filter, GridData};
use crate::types::{ColumnKey, ColumnRef, Coordinate, NavKey};

/// Pure navigation reducer: the coordinate a navigation key leads to.
///
/// Rows clamp to `[0, last_row]`. `Left`/`Right` move within registry
/// order and no-op at the edges; `Right` from the identifier column
/// enters the first data column. `Enter` never moves.
pub fn next_coordinate(
    coord: Coordinate,
    key: NavKey,
    last_row: usize,
    col_count: usize,
) -> Coordinate {
    match key {
        NavKey::Up => Coordinate {
            row: coord.row.saturating_sub(1),
            ..coord
        },
        NavKey::Down => Coordinate {
            row: (coord.row + 1).min(last_row),
            ..coord
        },
        NavKey::Left => match coord.column {
            ColumnRef::Data(c) if c > 0 => Coordinate::data(coord.row, c - 1),
            _ => coord,
        },
        NavKey::Right => match coord.column {
            ColumnRef::Data(c) if c + 1 < col_count => Coordinate::data(coord.row, c + 1),
            ColumnRef::Id if col_count > 0 => Coordinate::data(coord.row, 0),
            _ => coord,
        },
        NavKey::Enter => coord,
    }
}

/// All mutable UI state, owned by one controller.
#[derive(Debug, Clone)]
pub struct GridState {
    /// The tabular store and column registry.
    pub grid: GridData,
    /// Global filter query; empty means all rows visible.
    pub filter: String,
    /// Selected cell, if any.
    pub selected: Option<Coordinate>,
    /// Editing cell, if any. Never references the identifier column.
    pub editing: Option<Coordinate>,
}

impl GridState {
    /// State over an existing store; nothing selected.
    pub fn new(grid: GridData) -> Self {
        Self {
            grid,
            filter: String::new(),
            selected: None,
            editing: None,
        }
    }

    /// State over the startup sample dataset.
    pub fn sample() -> Self {
        Self::new(GridData::sample())
    }

    /// Replace the filter query.
    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_string();
    }

    /// Store indices of currently visible rows, in original order.
    pub fn visible_rows(&self) -> Vec<usize> {
        filter::visible_row_indices(&self.grid.rows, &self.grid.columns, &self.filter)
    }

    /// Consume a keyboard event.
    ///
    /// Ignored unless a cell is selected and no edit is in progress.
    /// `Enter` on a data column enters editing at the unchanged
    /// coordinate; the selection is rewritten on every handled key.
    /// Returns whether the event was consumed.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if self.editing.is_some() {
            return false;
        }
        let Some(coord) = self.selected else {
            return false;
        };
        let last_row = self.grid.row_count().saturating_sub(1);
        let next = next_coordinate(coord, key, last_row, self.grid.columns.len());
        if key == NavKey::Enter {
            if let ColumnRef::Data(_) = next.column {
                self.editing = Some(next);
            }
        }
        self.selected = Some(next);
        true
    }

    /// Single click: select the clicked cell.
    ///
    /// An in-progress edit is not cleared here; the edit control's blur
    /// fires first and commits, then the click re-selects.
    pub fn click_cell(&mut self, coord: Coordinate) {
        self.selected = Some(coord);
    }

    /// Double click: enter editing on a data cell. A no-op on the
    /// identifier column.
    pub fn double_click_cell(&mut self, coord: Coordinate) {
        if let ColumnRef::Data(_) = coord.column {
            self.selected = Some(coord);
            self.editing = Some(coord);
        }
    }

    /// Live edit write: store `value` at the editing coordinate.
    ///
    /// There is no draft buffer; each keystroke lands in the store
    /// immediately. A no-op when no edit is open.
    pub fn edit_write(&mut self, value: &str) -> Result<()> {
        let Some(coord) = self.editing else {
            return Ok(());
        };
        let ColumnRef::Data(col) = coord.column else {
            return Ok(());
        };
        let Some(key) = self.grid.column_key(col).cloned() else {
            return Ok(());
        };
        self.grid.set(coord.row, &key, value)
    }

    /// Current value at the editing coordinate, if an edit is open.
    pub fn edit_value(&self) -> Option<&str> {
        let coord = self.editing?;
        let ColumnRef::Data(col) = coord.column else {
            return None;
        };
        let key = self.grid.column_key(col)?;
        self.grid.get(coord.row, key).ok()
    }

    /// Commit the open edit (Enter in the edit control, or blur).
    /// The editing coordinate is cleared; the selection is retained.
    pub fn commit_edit(&mut self) {
        self.editing = None;
    }

    /// Validated column append; see `GridData::add_column`.
    pub fn add_column(&mut self, name: &str) -> Result<ColumnKey> {
        self.grid.add_column(name)
    }

    /// Snapshot of the filtered grid, for the host page and the CLI.
    pub fn visible_snapshot(&self) -> VisibleGrid {
        let rows = self
            .visible_rows()
            .into_iter()
            .filter_map(|i| self.grid.rows.get(i))
            .map(|row| VisibleRow {
                id: row.id,
                values: self
                    .grid
                    .columns
                    .iter()
                    .map(|key| row.value(key).to_string())
                    .collect(),
            })
            .collect();
        VisibleGrid {
            columns: self.grid.columns.clone(),
            rows,
        }
    }
}

/// The filtered grid as the presentation layer sees it: column order
/// plus one value per column for each visible row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleGrid {
    pub columns: Vec<ColumnKey>,
    pub rows: Vec<VisibleRow>,
}

/// One visible row: identifier plus values in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleRow {
    pub id: u32,
    pub values: Vec<String>,
}
