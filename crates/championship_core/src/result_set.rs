//! Game results and the per-pair result sequence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StandingsError;
use crate::Result;

/// Maximum number of games recorded for one ordered pair of players
pub const MAX_GAMES_PER_PAIR: usize = 2;

/// Result of a single game from one side's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Points scored (1 for win, 0.5 for draw, 0 for loss)
    pub fn points(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }

    /// The same game seen from the opponent's side
    pub fn reversed(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn from_points(points: f64) -> Option<Self> {
        if points == 1.0 {
            Some(GameResult::Win)
        } else if points == 0.5 {
            Some(GameResult::Draw)
        } else if points == 0.0 {
            Some(GameResult::Loss)
        } else {
            None
        }
    }

    /// Parse a result token: `1`, `0`, `0.5`, `1/2`, `½`, or `w`/`d`/`l`
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "1" | "1.0" | "w" | "win" => Some(GameResult::Win),
            "0" | "0.0" | "l" | "loss" => Some(GameResult::Loss),
            "0.5" | ".5" | "1/2" | "½" | "d" | "draw" => Some(GameResult::Draw),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::Win => "1",
            GameResult::Draw => "½",
            GameResult::Loss => "0",
        };
        write!(f, "{s}")
    }
}

/// Where a recorded result came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Read from the ingested crosstable
    Real,
    /// Pushed by the operator as a what-if result
    Simulated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEntry {
    pub result: GameResult,
    pub origin: Origin,
}

/// Ordered results for one ordered pair of players, from the owner's side.
///
/// Holds at most [`MAX_GAMES_PER_PAIR`] entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<ResultEntry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_GAMES_PER_PAIR),
        }
    }

    /// Append a result, failing if the set is already full
    pub fn append(&mut self, result: GameResult, origin: Origin) -> Result<()> {
        if self.is_full() {
            return Err(StandingsError::CapacityExceeded {
                max: MAX_GAMES_PER_PAIR,
            });
        }
        self.entries.push(ResultEntry { result, origin });
        Ok(())
    }

    /// Remove and return the most recent entry
    pub fn remove_last(&mut self) -> Result<ResultEntry> {
        self.entries.pop().ok_or(StandingsError::EmptyResultSet)
    }

    /// Total points in this set (0 if empty)
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.result.points()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_GAMES_PER_PAIR
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultEntry> {
        self.entries.iter()
    }

    pub fn results(&self) -> Vec<GameResult> {
        self.entries.iter().map(|e| e.result).collect()
    }
}

#[cfg(test)]
#[path = "result_set_tests.rs"]
mod result_set_tests;
