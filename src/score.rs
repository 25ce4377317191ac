//! Spawn scoring.
//!
//! Matches players to their cells, spreads each player's weight over the
//! grid, then ranks the candidate cells. Lower scores are better spawns:
//! hostile players push the cells around them and in front of them up,
//! friendly players pull them down.
//!
//! Players are matched with a merge-style walk over the grid and the players,
//! both sorted by `(x, y)`. A player whose coordinate has no cell is skipped
//! without contributing anything; the count of skipped players is reported
//! on the [`Ranking`] but never changes the ranked cells.
//!
//! Scores accumulate: scoring the same grid twice doubles every delta.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::config::SpawnWeights;
use crate::grid::{by_coord, Coord, Grid, GridPosition, PlayerPosition};
use crate::spread::{normalize, spread_facing, spread_proximity, Sign};

/// Candidate cells ordered best (lowest score) first, plus diagnostics.
#[derive(Debug, Clone)]
pub struct Ranking<'g> {
    ranked: Vec<&'g GridPosition>,
    stats: WeighStats,
}

impl<'g> Ranking<'g> {
    /// Ranked cells, lowest score first. Equal scores keep `(x, y)` order.
    pub fn cells(&self) -> &[&'g GridPosition] {
        &self.ranked
    }

    /// The best spawn, if any candidate exists.
    pub fn best(&self) -> Option<&'g GridPosition> {
        self.ranked.first().copied()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'g GridPosition> + '_ {
        self.ranked.iter().copied()
    }

    /// Ranked coordinates, lowest score first.
    pub fn coords(&self) -> Vec<Coord> {
        self.ranked.iter().map(|cell| cell.coord()).collect()
    }

    /// Players whose coordinate matched a cell.
    pub fn matched_players(&self) -> usize {
        self.stats.matched
    }

    /// Players skipped because no cell sits at their coordinate.
    pub fn unmatched_players(&self) -> usize {
        self.stats.unmatched
    }

    /// Total number of cell charges made by both spreaders.
    pub fn cells_adjusted(&self) -> usize {
        self.stats.charged
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WeighStats {
    matched: usize,
    unmatched: usize,
    charged: usize,
}

/// Scores `grid` for `players` and ranks every cell.
///
/// Same as [`score`] with every grid coordinate as a candidate.
pub fn score_all<'g>(
    grid: &'g mut Grid,
    players: &[PlayerPosition],
    weights: &SpawnWeights,
) -> Ranking<'g> {
    let candidates = grid.coords();
    score(grid, players, &candidates, weights)
}

/// Scores `grid` for `players` and ranks the cells at `candidates`.
///
/// Candidates only filter the output. Weight spreads across every cell of
/// the grid whether or not it is a candidate. Candidate coordinates with no
/// cell are ignored.
pub fn score<'g>(
    grid: &'g mut Grid,
    players: &[PlayerPosition],
    candidates: &[Coord],
    weights: &SpawnWeights,
) -> Ranking<'g> {
    let mut sorted: Vec<&PlayerPosition> = players.iter().collect();
    sorted.sort_by(|a, b| by_coord(a, b));

    let stats = weigh_grid(grid.cells_mut(), &sorted, weights);
    debug!(
        players = players.len(),
        matched = stats.matched,
        unmatched = stats.unmatched,
        charged = stats.charged,
        "weighed grid"
    );

    let grid: &'g Grid = grid;
    let wanted: HashSet<Coord> = candidates.iter().copied().collect();
    let mut ranked: Vec<&'g GridPosition> = grid
        .cells()
        .iter()
        .filter(|cell| wanted.contains(&cell.coord()))
        .collect();
    ranked.sort_by_key(|cell| cell.score);

    Ranking { ranked, stats }
}

/// Walks sorted cells and sorted players in lockstep, spreading weight from
/// every matched player's cell.
fn weigh_grid(
    cells: &mut [GridPosition],
    players: &[&PlayerPosition],
    weights: &SpawnWeights,
) -> WeighStats {
    let mut stats = WeighStats::default();
    let (mut g, mut p) = (0, 0);

    while g < cells.len() && p < players.len() {
        let player = players[p];
        match cells[g].coord().cmp(&player.coord()) {
            Ordering::Less => g += 1,
            Ordering::Greater => {
                debug!(x = player.x, y = player.y, "player has no cell, skipped");
                stats.unmatched += 1;
                p += 1;
            }
            Ordering::Equal => {
                stats.charged += weigh_player(cells, g, player, weights);
                stats.matched += 1;
                // The grid cursor stays put: the next player may share this cell.
                p += 1;
            }
        }
    }

    for player in &players[p..] {
        debug!(x = player.x, y = player.y, "player has no cell, skipped");
    }
    stats.unmatched += players.len() - p;
    stats
}

fn weigh_player(
    cells: &mut [GridPosition],
    index: usize,
    player: &PlayerPosition,
    weights: &SpawnWeights,
) -> usize {
    let sign = Sign::for_player(player.friendly);
    let angle = normalize(player.view_angle, weights.angle_normalization);

    spread_proximity(cells, index, weights.proximity_weight, sign)
        + spread_facing(
            cells,
            index,
            weights.view_angle_weight,
            sign,
            angle,
            weights.view_angle_tolerance,
        )
}
