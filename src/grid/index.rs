//! Coordinate-to-index lookup over a sorted cell slice.
//!
//! Cells must be sorted ascending by `(x, y)`. The search never leaves the
//! slice: it bisects to the first entry whose key is not below the target and
//! stops there, so an entry with a larger `x` (or equal `x` and larger `y`)
//! ends the search as "not found".

use super::position::{Coord, GridPosition};

/// Returns the index of the cell at `(x, y)`, or `None` if no cell sits there.
///
/// With duplicate coordinates the first one in sort order is returned.
#[inline]
pub fn lookup(cells: &[GridPosition], x: i32, y: i32) -> Option<usize> {
    lookup_coord(cells, Coord::new(x, y))
}

/// Same as [`lookup`], keyed by a [`Coord`].
#[inline]
pub fn lookup_coord(cells: &[GridPosition], target: Coord) -> Option<usize> {
    let first = cells.partition_point(|cell| cell.coord() < target);
    match cells.get(first) {
        Some(cell) if cell.coord() == target => Some(first),
        _ => None,
    }
}

/// Looks up the cell `(dx, dy)` away from `from`. Offsets that overflow the
/// coordinate range are treated as missing cells.
#[inline]
pub fn neighbour(cells: &[GridPosition], from: Coord, dx: i32, dy: i32) -> Option<usize> {
    from.offset(dx, dy)
        .and_then(|target| lookup_coord(cells, target))
}

/// Returns true if `cells` satisfies the lookup precondition.
pub fn is_sorted(cells: &[GridPosition]) -> bool {
    cells.windows(2).all(|w| w[0].coord() <= w[1].coord())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: i32) -> Vec<GridPosition> {
        let mut cells = Vec::new();
        for x in 0..size {
            for y in 0..size {
                cells.push(GridPosition::new(x, y));
            }
        }
        cells
    }

    #[test]
    fn finds_every_cell_of_a_square() {
        let cells = square(4);
        assert!(is_sorted(&cells));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(lookup(&cells, cell.x, cell.y), Some(i));
        }
    }

    #[test]
    fn missing_coordinates_are_not_found() {
        let cells = square(3);
        assert_eq!(lookup(&cells, 3, 0), None);
        assert_eq!(lookup(&cells, 0, 3), None);
        assert_eq!(lookup(&cells, -1, 1), None);
        assert_eq!(lookup(&cells, 1, -1), None);
    }

    #[test]
    fn target_beyond_last_cell_stays_in_bounds() {
        let cells = square(2);
        // The last entry is (1, 1); anything after it must not read past the end.
        assert_eq!(lookup(&cells, 1, 2), None);
        assert_eq!(lookup(&cells, 9, 9), None);
    }

    #[test]
    fn empty_slice_finds_nothing() {
        assert_eq!(lookup(&[], 0, 0), None);
    }

    #[test]
    fn sparse_rows_are_searched_correctly() {
        let cells = vec![
            GridPosition::new(0, 0),
            GridPosition::new(0, 5),
            GridPosition::new(2, -3),
            GridPosition::new(2, 7),
        ];
        assert_eq!(lookup(&cells, 0, 5), Some(1));
        assert_eq!(lookup(&cells, 2, -3), Some(2));
        assert_eq!(lookup(&cells, 1, 0), None);
        assert_eq!(lookup(&cells, 2, 0), None);
    }

    #[test]
    fn duplicates_resolve_to_first() {
        let cells = vec![
            GridPosition::new(0, 0),
            GridPosition::new(1, 1),
            GridPosition::blocked(1, 1),
        ];
        assert_eq!(lookup(&cells, 1, 1), Some(1));
    }

    #[test]
    fn neighbour_handles_overflow() {
        let cells = vec![GridPosition::new(i32::MAX, 0)];
        assert_eq!(neighbour(&cells, Coord::new(i32::MAX, 0), 1, 0), None);
        assert_eq!(neighbour(&cells, Coord::new(i32::MAX - 1, 0), 1, 0), Some(0));
    }

    #[test]
    fn detects_unsorted_input() {
        let cells = vec![GridPosition::new(1, 0), GridPosition::new(0, 0)];
        assert!(!is_sorted(&cells));
    }
}
