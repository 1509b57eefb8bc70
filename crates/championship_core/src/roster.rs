//! Players and the roster arena

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{IngestError, StandingsError};
use crate::ingest::{parse_cell, Cell, Crosstable};
use crate::result_set::{Origin, ResultSet, MAX_GAMES_PER_PAIR};
use crate::Result;

/// Stable handle of a player inside a [`Roster`] (0-based arena index).
///
/// Only a roster hands these out; use [`Roster::id`] or [`Roster::ids`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PlayerId(pub(crate) usize);

impl PlayerId {
    /// 1-based roster number, as shown to the operator
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.number())
    }
}

/// A championship participant
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Results against each scheduled opponent, from this player's side
    games: BTreeMap<PlayerId, ResultSet>,
    /// Derived: total points
    pub score: f64,
    /// Derived: Buchholz-style tie-break
    pub tie_break: f64,
}

impl Player {
    fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            games: BTreeMap::new(),
            score: 0.0,
            tie_break: 0.0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Results against `other`, or `None` when the pair has no scheduled game
    pub fn opponent_results(&self, other: PlayerId) -> Option<&ResultSet> {
        self.games.get(&other)
    }

    pub(crate) fn opponent_results_mut(&mut self, other: PlayerId) -> Option<&mut ResultSet> {
        self.games.get_mut(&other)
    }

    /// Scheduled opponents and the results against them, ordered by opponent id
    pub fn games(&self) -> impl Iterator<Item = (PlayerId, &ResultSet)> {
        self.games.iter().map(|(id, set)| (*id, set))
    }
}

/// All players of one championship, in ingestion order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from a crosstable, validating that both sides of every
    /// pair agree on how many games were played and who won them.
    pub fn from_crosstable(table: &Crosstable) -> std::result::Result<Self, IngestError> {
        let count = table.players.len();
        if count == 0 {
            return Err(IngestError::EmptyRoster);
        }

        let mut players = Vec::with_capacity(count);
        for (i, row) in table.players.iter().enumerate() {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(IngestError::EmptyName { index: i + 1 });
            }
            // Names are looked up case-insensitively, so they must be unique that way
            if players.iter().any(|p: &Player| p.name.eq_ignore_ascii_case(name)) {
                return Err(IngestError::DuplicateName(name.to_string()));
            }
            if row.results.len() != count {
                return Err(IngestError::RaggedRow {
                    name: name.to_string(),
                    found: row.results.len(),
                    expected: count,
                });
            }
            players.push(Player::new(PlayerId(i), name));
        }

        for (i, row) in table.players.iter().enumerate() {
            for (j, raw) in row.results.iter().enumerate() {
                let cell = parse_cell(raw).map_err(|token| IngestError::BadToken {
                    token,
                    row: players[i].name.clone(),
                    col: players[j].name.clone(),
                })?;

                let Cell::Games(results) = cell else {
                    continue;
                };
                if i == j {
                    // An empty diagonal cell still means "no game"
                    if results.is_empty() {
                        continue;
                    }
                    return Err(IngestError::SelfPairing(players[i].name.clone()));
                }
                let found = results.len();
                let mut set = ResultSet::new();
                for result in results {
                    set.append(result, Origin::Real)
                        .map_err(|_| IngestError::TooManyGames {
                            row: players[i].name.clone(),
                            col: players[j].name.clone(),
                            found,
                            max: MAX_GAMES_PER_PAIR,
                        })?;
                }
                players[i].games.insert(PlayerId(j), set);
            }
        }

        let roster = Self { players };
        roster.check_symmetry()?;

        for player in &roster.players {
            if player.games.is_empty() && count > 1 {
                log::warn!("{} has no scheduled games", player.name);
            }
        }
        log::info!(
            "Roster built: {} players, {} games recorded",
            roster.len(),
            roster.total_games()
        );
        Ok(roster)
    }

    fn check_symmetry(&self) -> std::result::Result<(), IngestError> {
        for a in &self.players {
            for (b_id, ours) in a.games() {
                let b = &self.players[b_id.0];
                let Some(theirs) = b.opponent_results(a.id) else {
                    return Err(IngestError::AsymmetricPair {
                        a: a.name.clone(),
                        b: b.name.clone(),
                    });
                };
                let consistent = ours.len() == theirs.len()
                    && ours
                        .iter()
                        .zip(theirs.iter())
                        .all(|(x, y)| x.result.reversed() == y.result);
                if !consistent {
                    return Err(IngestError::InconsistentResults {
                        a: a.name.clone(),
                        b: b.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Resolve a 1-based roster number
    pub fn id(&self, index: usize) -> Result<PlayerId> {
        if index == 0 || index > self.players.len() {
            return Err(StandingsError::PlayerNotFound {
                index,
                count: self.players.len(),
            });
        }
        Ok(PlayerId(index - 1))
    }

    /// Look up a player by 1-based roster number
    pub fn get(&self, index: usize) -> Result<&Player> {
        let id = self.id(index)?;
        Ok(&self.players[id.0])
    }

    /// Look up a player by handle.
    ///
    /// Panics if `id` did not come from this roster.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.0]
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len()).map(PlayerId)
    }

    /// Number of recorded games, each counted once
    pub fn total_games(&self) -> usize {
        let entries: usize = self
            .players
            .iter()
            .flat_map(|p| p.games.values())
            .map(ResultSet::len)
            .sum();
        entries / 2
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
