//! The [`Cell`] coordinate type.

use std::fmt;

use crate::error::CellOverflow;

/// One cell of the unbounded Life plane, addressed as `(row, col)`.
///
/// Rows grow downwards and columns grow to the right on screen. Ordering is
/// row-major; every canonical encoding in the workspace sorts by it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Cell {
    /// The cell at `(0, 0)`.
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    /// Create a cell at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`, or `None` if either axis leaves the
    /// `i32` plane.
    pub fn checked_offset(self, d_row: i32, d_col: i32) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }

    /// Offset by `(d_row, d_col)`, rejecting results outside the plane.
    pub fn offset(self, d_row: i32, d_col: i32) -> Result<Cell, CellOverflow> {
        self.checked_offset(d_row, d_col).ok_or(CellOverflow)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<[i32; 2]> for Cell {
    fn from([row, col]: [i32; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for [i32; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}
