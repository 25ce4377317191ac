//! The cell arena for one map.
//!
//! A `Grid` owns every cell of a map and keeps them sorted ascending by
//! `(x, y)`, which is the precondition of every lookup. Scoring mutates the
//! cells in place; clone the grid first to keep an untouched copy.

use super::index::{is_sorted, lookup_coord};
use super::position::{by_coord, Coord, GridPosition};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<GridPosition>,
}

impl Grid {
    /// Builds a grid from cells in any order. The sort is stable, so among
    /// duplicate coordinates the one supplied first is the one lookups find.
    pub fn new(mut cells: Vec<GridPosition>) -> Self {
        cells.sort_by(|a, b| by_coord(a, b));
        Grid { cells }
    }

    /// An all-adjustable rectangle covering `0..width` by `0..height`.
    pub fn rectangle(width: i32, height: i32) -> Self {
        let mut cells = Vec::with_capacity(width.max(0) as usize * height.max(0) as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(GridPosition::new(x, y));
            }
        }
        Grid { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in `(x, y)` order.
    pub fn cells(&self) -> &[GridPosition] {
        &self.cells
    }

    /// Mutable access to the cells. Coordinates are not exposed mutably so
    /// the sort order cannot be broken from outside.
    pub(crate) fn cells_mut(&mut self) -> &mut [GridPosition] {
        debug_assert!(is_sorted(&self.cells));
        &mut self.cells
    }

    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        lookup_coord(&self.cells, coord)
    }

    pub fn get(&self, coord: Coord) -> Option<&GridPosition> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    /// Returns the score of the cell at `coord`.
    pub fn score_at(&self, coord: Coord) -> Option<i64> {
        self.get(coord).map(|cell| cell.score)
    }

    /// Overwrites the score of the cell at `coord`. Returns false if there is
    /// no such cell.
    pub fn set_score(&mut self, coord: Coord, score: i64) -> bool {
        match self.index_of(coord) {
            Some(i) => {
                self.cells[i].score = score;
                true
            }
            None => false,
        }
    }

    /// Marks the cell at `coord` as (non-)adjustable. Returns false if there
    /// is no such cell.
    pub fn set_adjustable(&mut self, coord: Coord, adjustable: bool) -> bool {
        match self.index_of(coord) {
            Some(i) => {
                self.cells[i].adjustable = adjustable;
                true
            }
            None => false,
        }
    }

    /// Every coordinate in the grid, in sort order.
    pub fn coords(&self) -> Vec<Coord> {
        self.cells.iter().map(GridPosition::coord).collect()
    }

    /// Zeroes every score, undoing accumulation from earlier scoring calls.
    pub fn reset_scores(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.score = 0;
        }
    }

    pub fn into_cells(self) -> Vec<GridPosition> {
        self.cells
    }
}

impl FromIterator<GridPosition> for Grid {
    fn from_iter<I: IntoIterator<Item = GridPosition>>(iter: I) -> Self {
        Grid::new(iter.into_iter().collect())
    }
}

impl From<Vec<GridPosition>> for Grid {
    fn from(cells: Vec<GridPosition>) -> Self {
        Grid::new(cells)
    }
}
