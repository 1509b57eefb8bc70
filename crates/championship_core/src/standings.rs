//! Render-ready standings snapshot

use serde::Serialize;

use crate::result_set::GameResult;
use crate::roster::{PlayerId, Roster};
use crate::scoring::standings_order;
use crate::simulation::Simulation;

/// One crosstable cell, from the row player's side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellView {
    /// The row player's own column
    Myself,
    /// No game between the pair
    NotScheduled,
    /// Recorded games, oldest first. `simulated[k]` flags `results[k]`.
    Results {
        results: Vec<GameResult>,
        simulated: Vec<bool>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    /// Standings position; players tied on score and tie-break share it
    pub rank: usize,
    /// 1-based roster number, used to address the player in commands
    pub number: usize,
    pub id: PlayerId,
    pub name: String,
    /// One cell per row of the table, in the same (rank) order
    pub cells: Vec<CellView>,
    pub score: f64,
    pub tie_break: f64,
}

/// Full table plus the counters a renderer shows around it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    pub player_count: usize,
    pub simulation_count: usize,
    pub rows: Vec<RenderRow>,
}

/// Build the rank-ordered table from scores already stored on the roster.
///
/// Simulated entries are identified by count: a pair with `n` active
/// simulations has its last `n` entries flagged. Equal results against the
/// same opponent cannot be told apart by value, and LIFO push/pop keeps the
/// simulated entries at the tail of each result set.
pub fn snapshot(roster: &Roster, simulations: &[Simulation]) -> Standings {
    let order = standings_order(roster);
    let mut rows = Vec::with_capacity(order.len());
    let mut previous: Option<(f64, f64, usize)> = None;

    for (position, &id) in order.iter().enumerate() {
        let player = roster.player(id);

        let rank = match previous {
            Some((score, tie_break, rank))
                if score == player.score && tie_break == player.tie_break =>
            {
                rank
            }
            _ => position + 1,
        };
        previous = Some((player.score, player.tie_break, rank));

        let cells = order
            .iter()
            .map(|&opponent| cell_view(roster, simulations, id, opponent))
            .collect();

        rows.push(RenderRow {
            rank,
            number: id.number(),
            id,
            name: player.name().to_string(),
            cells,
            score: player.score,
            tie_break: player.tie_break,
        });
    }

    Standings {
        player_count: roster.len(),
        simulation_count: simulations.len(),
        rows,
    }
}

fn cell_view(
    roster: &Roster,
    simulations: &[Simulation],
    id: PlayerId,
    opponent: PlayerId,
) -> CellView {
    if id == opponent {
        return CellView::Myself;
    }
    let Some(set) = roster.player(id).opponent_results(opponent) else {
        return CellView::NotScheduled;
    };

    let active = simulations
        .iter()
        .filter(|s| s.involves_pair(id, opponent))
        .count();
    let first_simulated = set.len().saturating_sub(active);

    CellView::Results {
        results: set.results(),
        simulated: (0..set.len()).map(|k| k >= first_simulated).collect(),
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
