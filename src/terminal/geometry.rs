//! Terminal geometry value types
//!
//! Positions and sizes on the terminal grid. Both are immutable value
//! types; a "move" produces a new value rather than mutating in place.

use serde::{Deserialize, Serialize};

/// A (column, row) pair relative to the top-left corner of the terminal.
///
/// Coordinates are signed: callers may request negative positions (which
/// the terminal clamps to the edge) and a resize may leave a stored cursor
/// outside the new bounds until the next operation re-clamps it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalPosition {
    /// Column (0-indexed)
    pub column: i32,
    /// Row (0-indexed)
    pub row: i32,
}

impl TerminalPosition {
    /// The top-left corner of the terminal, (0, 0)
    pub const TOP_LEFT: TerminalPosition = TerminalPosition { column: 0, row: 0 };

    /// Create a new position
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Return a copy of this position with a different column
    pub fn with_column(self, column: i32) -> Self {
        Self { column, ..self }
    }

    /// Return a copy of this position with a different row
    pub fn with_row(self, row: i32) -> Self {
        Self { row, ..self }
    }

    /// Return a copy of this position shifted by the given deltas
    pub fn with_relative(self, delta_column: i32, delta_row: i32) -> Self {
        Self {
            column: self.column + delta_column,
            row: self.row + delta_row,
        }
    }
}

/// A (columns, rows) pair describing the terminal's visible grid dimensions.
///
/// Unlike positions, sizes are unsigned; callers may shrink a terminal as
/// well as grow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalSize {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
}

impl TerminalSize {
    /// Create a new size
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Return a copy of this size with a different column count
    pub fn with_columns(self, columns: usize) -> Self {
        Self { columns, ..self }
    }

    /// Return a copy of this size with a different row count
    pub fn with_rows(self, rows: usize) -> Self {
        Self { rows, ..self }
    }

    /// Total number of cells in the grid
    pub fn cell_count(self) -> usize {
        self.columns * self.rows
    }

    /// Whether a position lies inside this size
    pub fn contains(self, position: TerminalPosition) -> bool {
        position.column >= 0
            && position.row >= 0
            && (position.column as usize) < self.columns
            && (position.row as usize) < self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_with_builders() {
        let pos = TerminalPosition::new(3, 7);
        assert_eq!(pos.with_column(5), TerminalPosition::new(5, 7));
        assert_eq!(pos.with_row(0), TerminalPosition::new(3, 0));
        assert_eq!(pos.with_relative(-1, 2), TerminalPosition::new(2, 9));
        // Original is unchanged
        assert_eq!(pos, TerminalPosition::new(3, 7));
    }

    #[test]
    fn test_top_left() {
        assert_eq!(TerminalPosition::TOP_LEFT, TerminalPosition::new(0, 0));
        assert_eq!(TerminalPosition::default(), TerminalPosition::TOP_LEFT);
    }

    #[test]
    fn test_size_contains() {
        let size = TerminalSize::new(80, 24);
        assert!(size.contains(TerminalPosition::new(0, 0)));
        assert!(size.contains(TerminalPosition::new(79, 23)));
        assert!(!size.contains(TerminalPosition::new(80, 0)));
        assert!(!size.contains(TerminalPosition::new(0, 24)));
        assert!(!size.contains(TerminalPosition::new(-1, 0)));
    }

    #[test]
    fn test_size_cell_count() {
        assert_eq!(TerminalSize::new(80, 24).cell_count(), 1920);
        assert_eq!(TerminalSize::new(0, 24).cell_count(), 0);
    }
}
