//! Score and tie-break computation, and the standings order
//!
//! Scores are recomputed from scratch after every mutation rather than
//! patched: a tie-break reads the score of every opponent, so a single new
//! result can move the tie-break of players who did not take part in it.
//!
//! Computation is two-phase. All scores are finalized first, then every
//! tie-break is computed from that one score snapshot.

use std::cmp::Ordering;

use crate::roster::{Player, PlayerId, Roster};

/// Points per player, indexed by [`PlayerId`]
pub fn compute_scores(roster: &Roster) -> Vec<f64> {
    roster
        .iter()
        .map(|player| player.games().map(|(_, set)| set.sum()).sum::<f64>())
        .collect()
}

/// Buchholz-style tie-break per player, indexed by [`PlayerId`].
///
/// For every game a player has recorded, the points scored in it are
/// weighted by the opponent's score in `scores`. `scores` must be the
/// output of [`compute_scores`] for the same roster state.
pub fn compute_tie_breaks(roster: &Roster, scores: &[f64]) -> Vec<f64> {
    roster
        .iter()
        .map(|player| {
            player
                .games()
                .flat_map(|(opponent, set)| {
                    set.iter()
                        .map(move |entry| entry.result.points() * scores[opponent.0])
                })
                .sum::<f64>()
        })
        .collect()
}

/// Recompute scores and tie-breaks onto every player
pub fn refresh(roster: &mut Roster) {
    let scores = compute_scores(roster);
    let tie_breaks = compute_tie_breaks(roster, &scores);
    for (player, (score, tie_break)) in roster.iter_mut().zip(scores.into_iter().zip(tie_breaks)) {
        player.score = score;
        player.tie_break = tie_break;
    }
    log::debug!("Recomputed scores for {} players", roster.len());
}

/// Standings comparator: score desc, then tie-break desc, then name asc.
///
/// Names are unique within a roster, so this is a total order.
pub fn compare_standing(a: &Player, b: &Player) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.tie_break.total_cmp(&a.tie_break))
        .then_with(|| a.name().cmp(b.name()))
}

/// Players in standings order, using the scores already stored on them
pub fn standings_order(roster: &Roster) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = roster.ids().collect();
    ids.sort_by(|a, b| compare_standing(roster.player(*a), roster.player(*b)));
    ids
}

/// Recompute everything and return the full standings order
pub fn rank(roster: &mut Roster) -> Vec<PlayerId> {
    refresh(roster);
    standings_order(roster)
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
