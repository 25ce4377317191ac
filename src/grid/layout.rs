//! ASCII map layouts.
//!
//! One text row per `y` (the first row is `y = 0`), one character per `x`:
//!
//! - `.` adjustable cell
//! - `#` non-adjustable cell (wall)
//! - `S` adjustable cell that is also a spawn candidate
//! - space or `-` no cell
//!
//! ```text
//! S..#
//! .#..
//! ...S
//! ```

use super::map::Grid;
use super::position::{Coord, GridPosition};

/// Errors that can occur while parsing a map layout.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout contains no cells")]
    Empty,

    #[error("unknown map character '{ch}' at row {row}, column {column}")]
    UnknownCharacter { ch: char, row: usize, column: usize },

    #[error("layout is too large: {0} rows or columns exceed the coordinate range")]
    TooLarge(usize),
}

/// A parsed layout: the grid plus any `S` spawn markers.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub spawn_points: Vec<Coord>,
}

/// Parses a layout string into a grid.
pub fn parse_layout(text: &str) -> Result<Layout, LayoutError> {
    let mut cells = Vec::new();
    let mut spawn_points = Vec::new();

    for (row, line) in text.lines().enumerate() {
        let y = i32::try_from(row).map_err(|_| LayoutError::TooLarge(row))?;
        for (column, ch) in line.chars().enumerate() {
            let x = i32::try_from(column).map_err(|_| LayoutError::TooLarge(column))?;
            match ch {
                '.' => cells.push(GridPosition::new(x, y)),
                '#' => cells.push(GridPosition::blocked(x, y)),
                'S' => {
                    cells.push(GridPosition::new(x, y));
                    spawn_points.push(Coord::new(x, y));
                }
                ' ' | '-' => {}
                other => {
                    return Err(LayoutError::UnknownCharacter {
                        ch: other,
                        row,
                        column,
                    })
                }
            }
        }
    }

    if cells.is_empty() {
        return Err(LayoutError::Empty);
    }

    spawn_points.sort();
    Ok(Layout {
        grid: Grid::new(cells),
        spawn_points,
    })
}

/// Renders a grid back into layout notation, marking `spawn_points` with `S`.
/// Rows and columns span the bounding box of the grid.
pub fn format_layout(grid: &Grid, spawn_points: &[Coord]) -> String {
    let cells = grid.cells();
    let Some(first) = cells.first() else {
        return String::new();
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for cell in cells {
        min_x = min_x.min(cell.x);
        max_x = max_x.max(cell.x);
        min_y = min_y.min(cell.y);
        max_y = max_y.max(cell.y);
    }

    let mut out = String::new();
    for y in min_y..=max_y {
        if y > min_y {
            out.push('\n');
        }
        for x in min_x..=max_x {
            let coord = Coord::new(x, y);
            let ch = match grid.get(coord) {
                None => '-',
                Some(cell) if !cell.adjustable => '#',
                Some(_) if spawn_points.contains(&coord) => 'S',
                Some(_) => '.',
            };
            out.push(ch);
        }
    }
    out
}
