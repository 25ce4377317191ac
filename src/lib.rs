//! Spawnscore library.
//!
//! Ranks the cells of a game map by how desirable they are as spawn points,
//! given where the players of both teams stand and which way they face.
//! Exposes the grid representation, the two weight spreaders, the scoring
//! orchestrator, and the scenario format used by the binary entry point.

pub mod config;
pub mod grid;
pub mod scenario;
pub mod score;
pub mod spread;

pub use config::SpawnWeights;
pub use grid::{Coord, Grid, GridPosition, PlayerPosition};
pub use score::{score, score_all, Ranking};
