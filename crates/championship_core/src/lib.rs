//! Standings engine for round-robin championships
//!
//! This crate provides:
//! - Ingestion of crosstable snapshots into a validated roster
//! - Score and Buchholz-style tie-break computation
//! - A LIFO stack of what-if results layered over the real ones
//! - Render-ready standings snapshots with simulated entries flagged
//!
//! # Usage
//!
//! ```
//! use championship_core::{Championship, Crosstable, GameResult};
//!
//! let table = Crosstable::unplayed(&["alice", "bob", "carol"]);
//! let mut champ = Championship::ingest(&table).unwrap();
//!
//! champ.push(1, 2, GameResult::Win).unwrap();
//! assert_eq!(champ.state().rows[0].name, "alice");
//!
//! champ.pop().unwrap();
//! assert!(champ.list_simulations().is_empty());
//! ```

mod error;
mod ingest;
mod result_set;
mod roster;
pub mod scoring;
mod session;
mod simulation;
mod standings;

pub use error::*;
pub use ingest::*;
pub use result_set::*;
pub use roster::*;
pub use session::*;
pub use simulation::*;
pub use standings::*;

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, StandingsError>;
