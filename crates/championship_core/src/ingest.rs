//! Crosstable snapshots and the ingestion seam
//!
//! A crosstable is the square results table published for a round-robin
//! championship: row `i`, column `j` holds player i's results against
//! player j. Each cell is a short token string:
//!
//! - `X` - no game (self-pairing or unscheduled pair)
//! - `_` - scheduled game still in progress (ignored)
//! - `1`, `0`, `0.5`, `1/2`, `½` - finished games, space separated
//!
//! An empty cell is a scheduled pair with no finished games yet.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::IngestError;
use crate::result_set::GameResult;

/// Marker for a game still being played
const ONGOING_TOKEN: &str = "_";

/// Marker for a pair that has no game at all
const NO_GAME_TOKEN: &str = "X";

/// A raw crosstable as read from a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Crosstable {
    /// Name/description of the championship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rows in ingestion order
    pub players: Vec<CrosstableRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrosstableRow {
    pub name: String,
    /// One token string per column, in the same order as `players`
    pub results: Vec<String>,
}

/// A parsed crosstable cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    NoGame,
    Games(Vec<GameResult>),
}

/// Source of crosstable snapshots.
///
/// Implemented by anything that can produce the table a roster is built
/// from: a snapshot file on disk, or an in-memory table in tests.
pub trait TableIngestor {
    fn ingest(&self) -> Result<Crosstable, IngestError>;
}

impl Crosstable {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            players: Vec::new(),
        }
    }

    /// Builder-style helper for adding a row
    pub fn with_player(mut self, name: &str, results: &[&str]) -> Self {
        self.players.push(CrosstableRow {
            name: name.to_string(),
            results: results.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// A table of `names` where every pair is scheduled and nothing is played
    pub fn unplayed(names: &[&str]) -> Self {
        let mut table = Self::new(None);
        for (i, name) in names.iter().enumerate() {
            let results: Vec<&str> = (0..names.len())
                .map(|j| if i == j { NO_GAME_TOKEN } else { "" })
                .collect();
            table = table.with_player(name, &results);
        }
        table
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, IngestError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, IngestError> {
        Ok(serde_json::from_str(contents)?)
    }
}

impl TableIngestor for Crosstable {
    fn ingest(&self) -> Result<Crosstable, IngestError> {
        Ok(self.clone())
    }
}

/// Parse a single cell token string. Returns the first bad token on failure.
pub fn parse_cell(cell: &str) -> Result<Cell, String> {
    let cell = cell.trim();
    if cell.eq_ignore_ascii_case(NO_GAME_TOKEN) {
        return Ok(Cell::NoGame);
    }

    let mut games = Vec::new();
    for token in cell.split_whitespace() {
        if token == ONGOING_TOKEN {
            continue;
        }
        match GameResult::parse(token) {
            Some(result) => games.push(result),
            None => return Err(token.to_string()),
        }
    }
    Ok(Cell::Games(games))
}

/// Snapshot stored on disk as TOML or JSON, chosen by file extension
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableIngestor for SnapshotFile {
    fn ingest(&self) -> Result<Crosstable, IngestError> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let contents = std::fs::read_to_string(&self.path).map_err(|source| IngestError::Io {
            path: self.path.clone(),
            source,
        })?;

        let table = match extension.as_deref() {
            Some("toml") => Crosstable::from_toml_str(&contents)?,
            Some("json") => Crosstable::from_json_str(&contents)?,
            _ => return Err(IngestError::UnsupportedFormat(self.path.clone())),
        };

        log::info!(
            "Loaded snapshot {} ({} players)",
            self.path.display(),
            table.players.len()
        );
        Ok(table)
    }
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod ingest_tests;
