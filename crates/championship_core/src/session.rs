//! The engine instance a command shell talks to

use crate::error::IngestError;
use crate::ingest::TableIngestor;
use crate::result_set::GameResult;
use crate::roster::{PlayerId, Roster};
use crate::scoring::{rank, standings_order};
use crate::simulation::{Simulation, SimulationStack};
use crate::standings::{snapshot, Standings};
use crate::Result;

/// Owns the roster, the simulation history and the current ranking.
///
/// The stack recomputes scores and tie-breaks on every successful `push` or
/// `pop`; the facade then refreshes the standings order, so `state()` and
/// `ranking()` are always current.
#[derive(Debug, Clone)]
pub struct Championship {
    name: Option<String>,
    roster: Roster,
    simulations: SimulationStack,
    ranking: Vec<PlayerId>,
}

impl Championship {
    pub fn new(mut roster: Roster) -> Self {
        let ranking = rank(&mut roster);
        Self {
            name: None,
            roster,
            simulations: SimulationStack::new(),
            ranking,
        }
    }

    /// Ingest a crosstable and build the engine from it
    pub fn ingest(source: &impl TableIngestor) -> std::result::Result<Self, IngestError> {
        let table = source.ingest()?;
        let roster = Roster::from_crosstable(&table)?;
        let mut championship = Self::new(roster);
        championship.name = table.name;
        Ok(championship)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Current standings order, best first
    pub fn ranking(&self) -> &[PlayerId] {
        &self.ranking
    }

    pub fn state(&self) -> Standings {
        snapshot(&self.roster, self.simulations.history())
    }

    /// Simulate a game between roster numbers `x` and `y`
    pub fn push(&mut self, x: usize, y: usize, result: GameResult) -> Result<Simulation> {
        let simulation = self.simulations.push(&mut self.roster, x, y, result)?;
        self.rerank();
        Ok(simulation)
    }

    /// Undo the most recent simulation
    pub fn pop(&mut self) -> Result<Simulation> {
        let simulation = self.simulations.pop(&mut self.roster)?;
        self.rerank();
        Ok(simulation)
    }

    /// Pop every active simulation, returning them most recent first
    pub fn clear(&mut self) -> Vec<Simulation> {
        let mut removed = Vec::with_capacity(self.simulations.len());
        while let Ok(simulation) = self.simulations.pop(&mut self.roster) {
            removed.push(simulation);
        }
        if !removed.is_empty() {
            self.rerank();
        }
        removed
    }

    pub fn list_simulations(&self) -> &[Simulation] {
        self.simulations.history()
    }

    /// Human readable one-liner, e.g. `alice (#1) 1 - 0 bob (#2)`
    pub fn describe(&self, simulation: &Simulation) -> String {
        let x = self.roster.player(simulation.x());
        let y = self.roster.player(simulation.y());
        format!(
            "{} ({}) {} - {} {} ({})",
            x.name(),
            x.id(),
            simulation.result(),
            simulation.result().reversed(),
            y.name(),
            y.id()
        )
    }

    fn rerank(&mut self) {
        self.ranking = standings_order(&self.roster);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
