//! Sparse grid store for the unbounded Life plane.
//!
//! [`Grid`] holds only live cells. Dead cells are implicit, so memory is
//! proportional to the population, never to the extent of the plane.

use indexmap::IndexSet;

use crate::cell::Cell;
use crate::error::CellOverflow;

/// Set of live cells with average O(1) membership, insertion and removal.
///
/// Equality is set equality: two grids with the same live cells compare
/// equal regardless of the order the cells were inserted in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    live: IndexSet<Cell>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with room for `capacity` live cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: IndexSet::with_capacity(capacity),
        }
    }

    /// Whether `cell` is alive.
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Flip the membership of `cell`. Returns the new state (`true` = alive).
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.live.swap_remove(&cell) {
            false
        } else {
            self.live.insert(cell);
            true
        }
    }

    /// Mark `cell` alive. Returns `false` if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.live.insert(cell)
    }

    /// Mark `cell` dead. Returns `false` if it already was.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.live.swap_remove(&cell)
    }

    /// Replace the whole population with `cells`. Duplicates collapse.
    pub fn set_alive<I: IntoIterator<Item = Cell>>(&mut self, cells: I) {
        self.live.clear();
        self.live.extend(cells);
    }

    /// Mark every cell in `cells` alive, keeping the current population.
    pub fn union<I: IntoIterator<Item = Cell>>(&mut self, cells: I) {
        self.live.extend(cells);
    }

    /// Iterate over the live cells in unspecified order.
    ///
    /// The iterator borrows the grid, so it is a snapshot of the current
    /// generation; call again to restart.
    pub fn iter_alive(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Live cells in row-major order.
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Shift the whole population by `(d_row, d_col)`.
    ///
    /// All-or-nothing: if any cell would leave the `i32` plane the grid is
    /// left unchanged.
    pub fn translate(&mut self, d_row: i32, d_col: i32) -> Result<(), CellOverflow> {
        let moved = self
            .live
            .iter()
            .map(|cell| cell.offset(d_row, d_col))
            .collect::<Result<IndexSet<Cell>, CellOverflow>>()?;
        self.live = moved;
        Ok(())
    }
}

impl FromIterator<Cell> for Grid {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for Grid {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.live.extend(iter);
    }
}
