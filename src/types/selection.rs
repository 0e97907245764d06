/// Which column a coordinate points at.
///
/// The identifier column is rendered first and is selectable, but it is
/// not part of the column registry and can never be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    /// The row-number column.
    Id,
    /// A data column, by index into the column registry.
    Data(usize),
}

/// A cell coordinate, used for both the selected and the editing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    /// Row index into the store (0-based, unfiltered order).
    pub row: usize,
    /// Column the coordinate points at.
    pub column: ColumnRef,
}

impl Coordinate {
    /// Create a coordinate on a data column.
    pub fn data(row: usize, col: usize) -> Self {
        Self {
            row,
            column: ColumnRef::Data(col),
        }
    }

    /// Create a coordinate on the identifier column.
    pub fn id(row: usize) -> Self {
        Self {
            row,
            column: ColumnRef::Id,
        }
    }
}

/// Discriminated navigation event consumed by the selection reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` string to a navigation event.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "Enter" => Some(Self::Enter),
            _ => None,
        }
    }
}
