//! Omni-directional proximity spread.
//!
//! Covers a diamond around the origin whose radius equals the starting
//! magnitude. The origin branches into all four orthogonal directions once;
//! a vertical branch then keeps going straight and peels off horizontal
//! branches to either side at every hop, and a horizontal branch only keeps
//! going straight. Cells reached along more than one path are charged once
//! per path.

use tracing::trace;

use super::{charge, Sign};
use crate::grid::{neighbour, GridPosition};

/// Direction along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Negative,
    Positive,
}

impl Axis {
    #[inline]
    pub const fn delta(self) -> i32 {
        match self {
            Axis::Negative => -1,
            Axis::Positive => 1,
        }
    }
}

/// How a proximity branch continues from the cell it just charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// The player's own cell: branch in all four directions.
    Source,
    /// Travelling along y: continue straight, branch left and right.
    Vertical(Axis),
    /// Travelling along x: continue straight only.
    Horizontal(Axis),
}

impl Heading {
    /// Offsets and headings of the branches leaving a cell.
    fn branches(self) -> Branches {
        let mut out = Branches::default();
        match self {
            Heading::Source => {
                out.push(0, -1, Heading::Vertical(Axis::Negative));
                out.push(-1, 0, Heading::Horizontal(Axis::Negative));
                out.push(1, 0, Heading::Horizontal(Axis::Positive));
                out.push(0, 1, Heading::Vertical(Axis::Positive));
            }
            Heading::Vertical(axis) => {
                out.push(-1, 0, Heading::Horizontal(Axis::Negative));
                out.push(0, axis.delta(), Heading::Vertical(axis));
                out.push(1, 0, Heading::Horizontal(Axis::Positive));
            }
            Heading::Horizontal(axis) => {
                out.push(axis.delta(), 0, Heading::Horizontal(axis));
            }
        }
        out
    }
}

/// At most four branches leave a cell.
#[derive(Default)]
struct Branches {
    items: [(i32, i32, Option<Heading>); 4],
    len: usize,
}

impl Branches {
    fn push(&mut self, dx: i32, dy: i32, heading: Heading) {
        self.items[self.len] = (dx, dy, Some(heading));
        self.len += 1;
    }

    fn iter(&self) -> impl Iterator<Item = (i32, i32, Heading)> + '_ {
        self.items[..self.len]
            .iter()
            .filter_map(|&(dx, dy, h)| h.map(|h| (dx, dy, h)))
    }
}

/// Spreads `magnitude` outward from the cell at `origin`, starting with a
/// full four-way branch. Returns how many times a cell was charged.
pub fn spread_proximity(
    cells: &mut [GridPosition],
    origin: usize,
    magnitude: i64,
    sign: Sign,
) -> usize {
    spread_proximity_from(cells, origin, magnitude, sign, Heading::Source)
}

/// Spreads `magnitude` from `origin` as if a branch with `heading` had just
/// arrived there.
pub fn spread_proximity_from(
    cells: &mut [GridPosition],
    origin: usize,
    magnitude: i64,
    sign: Sign,
    heading: Heading,
) -> usize {
    if origin >= cells.len() {
        return 0;
    }

    let mut charged = 0;
    let mut stack = vec![(origin, magnitude, heading)];
    while let Some((index, remaining, heading)) = stack.pop() {
        if !charge(&mut cells[index], remaining, sign) {
            continue;
        }
        charged += 1;

        let next = remaining - 1;
        if next <= 0 {
            continue;
        }
        let at = cells[index].coord();
        for (dx, dy, branch) in heading.branches().iter() {
            if let Some(i) = neighbour(cells, at, dx, dy) {
                stack.push((i, next, branch));
            }
        }
    }

    trace!(origin, magnitude, charged, "proximity spread");
    charged
}
