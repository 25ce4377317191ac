//! Facing spread along a player's view direction.
//!
//! From each charged cell the spread steps one unit against the
//! `(cos, sin)` of the normalized angle, rounding to the nearest cell. To
//! approximate a view cone rather than a single ray, every step also fans out
//! diagonally: offset `i` in `1..=tolerance` probes `(nx + i, ny + i)`, and
//! for `i > 1` also `(nx - i + 1, ny - i + 1)`. The fan widens as the spread
//! moves away from the player. Overlapping branches charge a cell once per
//! branch.

use tracing::trace;

use super::{charge, Sign};
use crate::grid::{lookup, neighbour, Coord, GridPosition};

/// Spreads `magnitude` from `origin` along `angle` (already normalized).
/// Returns how many times a cell was charged.
///
/// Work grows roughly as `(2 * tolerance) ^ magnitude`, so both values must
/// be kept small.
pub fn spread_facing(
    cells: &mut [GridPosition],
    origin: usize,
    magnitude: i64,
    sign: Sign,
    angle: f64,
    tolerance: u32,
) -> usize {
    if origin >= cells.len() {
        return 0;
    }

    let (step_x, step_y) = (-angle.cos(), -angle.sin());
    let tolerance = i32::try_from(tolerance).unwrap_or(i32::MAX);

    let mut charged = 0;
    let mut stack = vec![(origin, magnitude)];
    while let Some((index, remaining)) = stack.pop() {
        if !charge(&mut cells[index], remaining, sign) {
            continue;
        }
        charged += 1;

        let next = remaining - 1;
        if next <= 0 {
            continue;
        }
        let Some(ahead) = step(cells[index].coord(), step_x, step_y) else {
            continue;
        };

        if let Some(i) = lookup(cells, ahead.x, ahead.y) {
            stack.push((i, next));
        }
        for offset in 1..=tolerance {
            if let Some(i) = neighbour(cells, ahead, offset, offset) {
                stack.push((i, next));
            }
            if offset > 1 {
                if let Some(i) = neighbour(cells, ahead, 1 - offset, 1 - offset) {
                    stack.push((i, next));
                }
            }
        }
    }

    trace!(origin, magnitude, angle, tolerance, charged, "facing spread");
    charged
}

/// The cell one unit along the view direction from `at`.
fn step(at: Coord, step_x: f64, step_y: f64) -> Option<Coord> {
    let x = (step_x + f64::from(at.x)).round();
    let y = (step_y + f64::from(at.y)).round();
    if x < f64::from(i32::MIN) || x > f64::from(i32::MAX) {
        return None;
    }
    if y < f64::from(i32::MIN) || y > f64::from(i32::MAX) {
        return None;
    }
    Some(Coord::new(x as i32, y as i32))
}
