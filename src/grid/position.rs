//! Map cells, players, and the coordinates that link them.
//!
//! Both cells and players are ordered by their `(x, y)` coordinate, x first.
//! Every lookup and the player/cell lockstep match rely on that shared order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer map coordinate. Orders by `x`, then `y`.
///
/// Serializes as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Returns the coordinate shifted by `(dx, dy)`, or `None` if either
    /// axis would overflow.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn default_adjustable() -> bool {
    true
}

/// One scoreable map cell.
///
/// `score` accumulates across scoring calls. Cells that are not `adjustable`
/// (walls, out-of-bounds markers) never change score and stop any spread
/// that reaches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub score: i64,
    #[serde(default = "default_adjustable")]
    pub adjustable: bool,
}

impl GridPosition {
    /// Creates an adjustable cell with a zero score.
    pub const fn new(x: i32, y: i32) -> Self {
        GridPosition {
            x,
            y,
            score: 0,
            adjustable: true,
        }
    }

    /// Creates a cell that never receives weight and blocks propagation.
    pub const fn blocked(x: i32, y: i32) -> Self {
        GridPosition {
            x,
            y,
            score: 0,
            adjustable: false,
        }
    }

    #[inline]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// A player on the map, as seen from the team that is about to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPosition {
    pub x: i32,
    pub y: i32,
    /// True when the player is on the spawning team.
    #[serde(default)]
    pub friendly: bool,
    /// Raw facing value; see `spread::angle::normalize` for how it is read.
    #[serde(default)]
    pub view_angle: f64,
}

impl PlayerPosition {
    pub const fn new(x: i32, y: i32, friendly: bool, view_angle: f64) -> Self {
        PlayerPosition {
            x,
            y,
            friendly,
            view_angle,
        }
    }

    /// A player on the opposing team.
    pub const fn hostile(x: i32, y: i32, view_angle: f64) -> Self {
        PlayerPosition::new(x, y, false, view_angle)
    }

    /// A player on the spawning team.
    pub const fn friendly(x: i32, y: i32, view_angle: f64) -> Self {
        PlayerPosition::new(x, y, true, view_angle)
    }

    #[inline]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// The sort order shared by cells and players.
#[inline]
pub fn by_coord<A: HasCoord, B: HasCoord>(a: &A, b: &B) -> Ordering {
    a.coord().cmp(&b.coord())
}

/// Anything placed at a map coordinate.
pub trait HasCoord {
    fn coord(&self) -> Coord;
}

impl HasCoord for Coord {
    fn coord(&self) -> Coord {
        *self
    }
}

impl HasCoord for GridPosition {
    fn coord(&self) -> Coord {
        GridPosition::coord(self)
    }
}

impl HasCoord for PlayerPosition {
    fn coord(&self) -> Coord {
        PlayerPosition::coord(self)
    }
}

impl<T: HasCoord> HasCoord for &T {
    fn coord(&self) -> Coord {
        (**self).coord()
    }
}
