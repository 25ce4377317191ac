//! Scenario files.
//!
//! A scenario bundles everything one scoring call needs into a JSON
//! document:
//!
//! ```json
//! {
//!   "weights": { "proximity_weight": 3 },
//!   "map": "S..\n.#.\n..S",
//!   "players": [{ "x": 1, "y": 0, "friendly": false, "view_angle": 0.5 }],
//!   "candidates": [[0, 0], [2, 2]]
//! }
//! ```
//!
//! The grid comes from exactly one of `map` (layout notation, see
//! [`crate::grid::layout`]) or `cells` (explicit cell objects). Candidates
//! default to the `S` markers of the map, or to every cell when there are
//! none. Weights default to whatever the caller passes as fallback.

use std::fs;
use std::io::Read;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigError, SpawnWeights};
use crate::grid::{parse_layout, Coord, Grid, GridPosition, LayoutError, PlayerPosition};
use crate::score::score;

/// Errors that can occur while loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read scenario '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("scenario has neither 'map' nor 'cells'")]
    MissingGrid,

    #[error("scenario has both 'map' and 'cells'; use one")]
    ConflictingGrid,

    #[error("invalid map: {0}")]
    Layout(#[from] LayoutError),

    #[error("invalid weights: {0}")]
    Config(#[from] ConfigError),
}

/// A scenario as written on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub weights: Option<SpawnWeights>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub cells: Option<Vec<GridPosition>>,
    #[serde(default)]
    pub players: Vec<PlayerPosition>,
    #[serde(default)]
    pub candidates: Option<Vec<Coord>>,
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Scenario::from_json(&text)
    }

    /// Reads a scenario from any reader, typically stdin.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, ScenarioError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| ScenarioError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        Scenario::from_json(&text)
    }

    /// Builds the grid, resolves candidates and weights, and validates the
    /// weights. `fallback` is used when the scenario carries no weights.
    pub fn prepare(self, fallback: &SpawnWeights) -> Result<PreparedScenario, ScenarioError> {
        let weights = self.weights.unwrap_or(*fallback);
        weights.validate()?;

        let (grid, markers) = match (self.map, self.cells) {
            (Some(_), Some(_)) => return Err(ScenarioError::ConflictingGrid),
            (None, None) => return Err(ScenarioError::MissingGrid),
            (Some(map), None) => {
                let layout = parse_layout(&map)?;
                (layout.grid, layout.spawn_points)
            }
            (None, Some(cells)) => (Grid::new(cells), Vec::new()),
        };

        let candidates = match self.candidates {
            Some(candidates) => candidates,
            None if !markers.is_empty() => markers,
            None => grid.coords(),
        };

        debug!(
            cells = grid.len(),
            players = self.players.len(),
            candidates = candidates.len(),
            "prepared scenario"
        );
        Ok(PreparedScenario {
            grid,
            players: self.players,
            candidates,
            weights,
        })
    }
}

/// A scenario ready to score.
#[derive(Debug, Clone)]
pub struct PreparedScenario {
    pub grid: Grid,
    pub players: Vec<PlayerPosition>,
    pub candidates: Vec<Coord>,
    pub weights: SpawnWeights,
}

/// The outcome of scoring a scenario, detached from its grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Candidate cells, best (lowest score) first.
    pub ranked: Vec<GridPosition>,
    pub matched_players: usize,
    pub unmatched_players: usize,
    pub cells_adjusted: usize,
}

impl ScenarioReport {
    /// Keeps only the best `n` cells.
    pub fn truncate(&mut self, n: usize) {
        self.ranked.truncate(n);
    }
}

impl PreparedScenario {
    /// Scores the scenario's grid. Scores accumulate in `self.grid`.
    pub fn evaluate(&mut self) -> ScenarioReport {
        let ranking = score(
            &mut self.grid,
            &self.players,
            &self.candidates,
            &self.weights,
        );
        ScenarioReport {
            ranked: ranking.iter().cloned().collect(),
            matched_players: ranking.matched_players(),
            unmatched_players: ranking.unmatched_players(),
            cells_adjusted: ranking.cells_adjusted(),
        }
    }
}

/// Scores independent scenarios in parallel. Each scenario owns its grid,
/// so no cell is touched by more than one thread. Reports come back in input
/// order.
pub fn evaluate_batch(scenarios: Vec<PreparedScenario>) -> Vec<ScenarioReport> {
    scenarios
        .into_par_iter()
        .map(|mut scenario| scenario.evaluate())
        .collect()
}
