//! Error types for the standings engine and snapshot ingestion

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by engine operations.
///
/// Every variant is recoverable: an operation that fails leaves the roster
/// and the simulation history exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    /// A result set already holds the maximum number of games
    #[error("result set already holds {max} games")]
    CapacityExceeded { max: usize },

    /// Tried to remove an entry from an empty result set
    #[error("result set is empty")]
    EmptyResultSet,

    /// Lookup by an out-of-range 1-based roster number
    #[error("no player number {index} (valid range is 1..={count})")]
    PlayerNotFound { index: usize, count: usize },

    /// Simulation between a player and themselves, or a pair with no scheduled game
    #[error("invalid players for a simulation: {reason}")]
    InvalidPlayers { reason: String },

    /// The pair has already played every scheduled game
    #[error("all games between {x} and {y} have been played")]
    AllGamesPlayed { x: String, y: String },

    /// Pop with an empty simulation history
    #[error("there is no simulation to pop")]
    NoSimulationToPop,
}

/// Errors raised while turning a crosstable snapshot into a roster.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML snapshot: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot extension for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("snapshot has no players")]
    EmptyRoster,

    #[error("player {index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate player name: {0}")]
    DuplicateName(String),

    #[error("row for {name} has {found} cells, expected {expected}")]
    RaggedRow {
        name: String,
        found: usize,
        expected: usize,
    },

    #[error("unrecognized result token {token:?} in cell {row}/{col}")]
    BadToken {
        token: String,
        row: String,
        col: String,
    },

    #[error("cell {row}/{col} holds {found} games (at most {max} allowed)")]
    TooManyGames {
        row: String,
        col: String,
        found: usize,
        max: usize,
    },

    #[error("{0} is scheduled to play against themselves")]
    SelfPairing(String),

    #[error("{a} has a game against {b} but {b} has none against {a}")]
    AsymmetricPair { a: String, b: String },

    #[error("results between {a} and {b} do not add up to one point per game")]
    InconsistentResults { a: String, b: String },
}
