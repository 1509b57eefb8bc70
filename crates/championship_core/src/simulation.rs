//! Hypothetical results layered on top of the real ones, with LIFO undo

use serde::Serialize;

use crate::error::StandingsError;
use crate::result_set::{GameResult, Origin};
use crate::roster::{PlayerId, Roster};
use crate::scoring::refresh;
use crate::Result;

/// A what-if result, from `x`'s perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Simulation {
    x: PlayerId,
    y: PlayerId,
    result: GameResult,
}

impl Simulation {
    pub fn x(&self) -> PlayerId {
        self.x
    }

    pub fn y(&self) -> PlayerId {
        self.y
    }

    /// Result for `x` (`y` got the reverse)
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// True if this simulation is between `a` and `b`, in either order
    pub fn involves_pair(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.x == a && self.y == b) || (self.x == b && self.y == a)
    }
}

/// Ordered history of active simulations.
///
/// The stack only touches simulated entries, and only in LIFO order, so the
/// entry popped from a result set is always the one the matching push added.
/// Every successful push or pop recomputes the scores and tie-breaks stored
/// on the roster before returning.
#[derive(Debug, Clone, Default)]
pub struct SimulationStack {
    history: Vec<Simulation>,
}

impl SimulationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hypothetical game between roster numbers `x_index` and
    /// `y_index`. Validates everything before touching either player.
    pub fn push(
        &mut self,
        roster: &mut Roster,
        x_index: usize,
        y_index: usize,
        result: GameResult,
    ) -> Result<Simulation> {
        if x_index == y_index {
            return Err(StandingsError::InvalidPlayers {
                reason: format!("player {x_index} cannot play against themselves"),
            });
        }
        let x = roster.id(x_index).map_err(invalid_players)?;
        let y = roster.id(y_index).map_err(invalid_players)?;

        let Some(games) = roster.player(x).opponent_results(y) else {
            return Err(StandingsError::InvalidPlayers {
                reason: format!(
                    "{} and {} have no scheduled game",
                    roster.player(x).name(),
                    roster.player(y).name()
                ),
            });
        };
        if games.is_full() {
            return Err(StandingsError::AllGamesPlayed {
                x: roster.player(x).name().to_string(),
                y: roster.player(y).name().to_string(),
            });
        }

        append_pair(roster, x, y, result)?;

        let simulation = Simulation { x, y, result };
        self.history.push(simulation);
        refresh(roster);
        log::debug!(
            "Pushed simulation {} vs {}: {} ({} active)",
            roster.player(x).name(),
            roster.player(y).name(),
            result,
            self.history.len()
        );
        Ok(simulation)
    }

    /// Undo the most recent simulation
    pub fn pop(&mut self, roster: &mut Roster) -> Result<Simulation> {
        let simulation = self
            .history
            .last()
            .copied()
            .ok_or(StandingsError::NoSimulationToPop)?;

        remove_pair(roster, simulation.x, simulation.y)?;
        self.history.pop();
        refresh(roster);

        log::debug!(
            "Popped simulation {} vs {} ({} active)",
            roster.player(simulation.x).name(),
            roster.player(simulation.y).name(),
            self.history.len()
        );
        Ok(simulation)
    }

    /// Active simulations in push order
    pub fn history(&self) -> &[Simulation] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Number of active simulations between `a` and `b`
    pub fn count_between(&self, a: PlayerId, b: PlayerId) -> usize {
        self.history.iter().filter(|s| s.involves_pair(a, b)).count()
    }
}

fn invalid_players(err: StandingsError) -> StandingsError {
    StandingsError::InvalidPlayers {
        reason: err.to_string(),
    }
}

fn append_pair(roster: &mut Roster, x: PlayerId, y: PlayerId, result: GameResult) -> Result<()> {
    // Both sides hold the same number of entries, so checking x covered y
    let ours = roster
        .player_mut(x)
        .opponent_results_mut(y)
        .ok_or(StandingsError::EmptyResultSet)?;
    ours.append(result, Origin::Simulated)?;

    let theirs = roster
        .player_mut(y)
        .opponent_results_mut(x)
        .ok_or(StandingsError::EmptyResultSet)?;
    theirs.append(result.reversed(), Origin::Simulated)
}

fn remove_pair(roster: &mut Roster, x: PlayerId, y: PlayerId) -> Result<()> {
    let ours = roster
        .player_mut(x)
        .opponent_results_mut(y)
        .ok_or(StandingsError::EmptyResultSet)?;
    let removed = ours.remove_last()?;
    debug_assert_eq!(removed.origin, Origin::Simulated);

    let theirs = roster
        .player_mut(y)
        .opponent_results_mut(x)
        .ok_or(StandingsError::EmptyResultSet)?;
    let removed = theirs.remove_last()?;
    debug_assert_eq!(removed.origin, Origin::Simulated);
    Ok(())
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;
