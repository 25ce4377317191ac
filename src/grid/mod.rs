//! Map representation.
//!
//! Contains the cell and player types, the sorted cell arena, coordinate
//! lookup, and the ASCII layout notation.

pub mod index;
pub mod layout;
pub mod map;
pub mod position;

pub use index::{lookup, lookup_coord, neighbour};
pub use layout::{format_layout, parse_layout, Layout, LayoutError};
pub use map::Grid;
pub use position::{by_coord, Coord, GridPosition, HasCoord, PlayerPosition};
