//! Decaying weight propagation from a player's cell.
//!
//! Both spreaders add a signed, shrinking magnitude to the cells they reach:
//! the origin receives the full magnitude and every further hop one less,
//! until the magnitude reaches zero or a non-adjustable cell is hit.
//! Traversal uses an explicit work stack, so deep spreads never grow the
//! call stack.

pub mod angle;
pub mod facing;
pub mod proximity;

pub use angle::{normalize, AngleNormalization};
pub use facing::spread_facing;
pub use proximity::{spread_proximity, spread_proximity_from, Axis, Heading};

use crate::grid::GridPosition;

/// Direction of a player's contribution.
///
/// Hostile players push scores up (away from the best spawn), friendly
/// players pull them down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub const fn for_player(friendly: bool) -> Sign {
        if friendly {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    #[inline]
    pub const fn apply(self, magnitude: i64) -> i64 {
        match self {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

/// Adds `sign * magnitude` to the cell. Returns false, leaving the cell
/// untouched, when the magnitude is spent or the cell is not adjustable.
#[inline]
pub(crate) fn charge(cell: &mut GridPosition, magnitude: i64, sign: Sign) -> bool {
    if magnitude <= 0 || !cell.adjustable {
        return false;
    }
    cell.score = cell.score.saturating_add(sign.apply(magnitude));
    true
}
