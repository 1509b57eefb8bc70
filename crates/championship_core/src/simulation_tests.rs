use super::*;
use crate::ingest::Crosstable;
use crate::scoring::compute_scores;

fn unplayed(names: &[&str]) -> Roster {
    Roster::from_crosstable(&Crosstable::unplayed(names)).unwrap()
}

#[test]
fn test_push_appends_both_sides() {
    let mut roster = unplayed(&["a", "b", "c"]);
    let mut stack = SimulationStack::new();

    let sim = stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    assert_eq!(sim.x(), PlayerId(0));
    assert_eq!(sim.y(), PlayerId(1));
    assert_eq!(sim.result(), GameResult::Win);

    let a_vs_b = roster.player(PlayerId(0)).opponent_results(PlayerId(1)).unwrap();
    let b_vs_a = roster.player(PlayerId(1)).opponent_results(PlayerId(0)).unwrap();
    assert_eq!(a_vs_b.results(), vec![GameResult::Win]);
    assert_eq!(b_vs_a.results(), vec![GameResult::Loss]);
    assert!(a_vs_b.iter().all(|e| e.origin == Origin::Simulated));
    assert_eq!(stack.history(), &[sim]);
}

#[test]
fn test_push_rejects_invalid_players() {
    let mut roster = unplayed(&["a", "b"]);
    let mut stack = SimulationStack::new();

    for (x, y) in [(1, 1), (0, 2), (1, 3), (3, 1)] {
        let err = stack.push(&mut roster, x, y, GameResult::Draw).unwrap_err();
        assert!(
            matches!(err, StandingsError::InvalidPlayers { .. }),
            "push({x}, {y}) gave {err:?}"
        );
    }
    assert!(stack.is_empty());
    assert_eq!(roster.total_games(), 0);
}

#[test]
fn test_push_rejects_unscheduled_pair() {
    let table = Crosstable::new(None)
        .with_player("a", &["X", "X"])
        .with_player("b", &["X", "X"]);
    let mut roster = Roster::from_crosstable(&table).unwrap();
    let mut stack = SimulationStack::new();

    let err = stack.push(&mut roster, 1, 2, GameResult::Win).unwrap_err();
    assert!(matches!(err, StandingsError::InvalidPlayers { .. }));
}

#[test]
fn test_third_game_rejected() {
    let mut roster = unplayed(&["a", "b"]);
    let mut stack = SimulationStack::new();

    stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    stack.push(&mut roster, 2, 1, GameResult::Draw).unwrap();

    // Either direction counts against the same pair
    for (x, y) in [(1, 2), (2, 1)] {
        let err = stack.push(&mut roster, x, y, GameResult::Loss).unwrap_err();
        assert!(matches!(err, StandingsError::AllGamesPlayed { .. }));
    }
    assert_eq!(roster.player(PlayerId(0)).opponent_results(PlayerId(1)).unwrap().len(), 2);
    assert_eq!(roster.player(PlayerId(1)).opponent_results(PlayerId(0)).unwrap().len(), 2);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_third_game_rejected_on_real_results() {
    let table = Crosstable::new(None)
        .with_player("a", &["X", "1 1/2"])
        .with_player("b", &["0 1/2", "X"]);
    let mut roster = Roster::from_crosstable(&table).unwrap();
    let mut stack = SimulationStack::new();

    assert!(matches!(
        stack.push(&mut roster, 2, 1, GameResult::Win),
        Err(StandingsError::AllGamesPlayed { .. })
    ));
}

#[test]
fn test_pop_empty() {
    let mut roster = unplayed(&["a", "b"]);
    let mut stack = SimulationStack::new();
    assert_eq!(stack.pop(&mut roster), Err(StandingsError::NoSimulationToPop));
}

#[test]
fn test_pop_is_lifo() {
    let mut roster = unplayed(&["a", "b", "c"]);
    let mut stack = SimulationStack::new();

    let first = stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    let second = stack.push(&mut roster, 3, 2, GameResult::Draw).unwrap();

    assert_eq!(stack.pop(&mut roster).unwrap(), second);
    assert!(roster
        .player(PlayerId(2))
        .opponent_results(PlayerId(1))
        .unwrap()
        .is_empty());
    assert_eq!(roster.total_games(), 1);

    assert_eq!(stack.pop(&mut roster).unwrap(), first);
    assert_eq!(roster.total_games(), 0);
}

#[test]
fn test_pop_leaves_real_results() {
    let table = Crosstable::new(None)
        .with_player("a", &["X", "0"])
        .with_player("b", &["1", "X"]);
    let mut roster = Roster::from_crosstable(&table).unwrap();
    let mut stack = SimulationStack::new();

    stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    stack.pop(&mut roster).unwrap();

    let a_vs_b = roster.player(PlayerId(0)).opponent_results(PlayerId(1)).unwrap();
    assert_eq!(a_vs_b.results(), vec![GameResult::Loss]);
    assert!(a_vs_b.iter().all(|e| e.origin == Origin::Real));
}

#[test]
fn test_three_player_scenario() {
    let mut roster = unplayed(&["A", "B", "C"]);
    let mut stack = SimulationStack::new();

    stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    assert_eq!(roster.player(PlayerId(0)).score, 1.0);
    assert_eq!(roster.player(PlayerId(1)).score, 0.0);
    assert_eq!(roster.player(PlayerId(2)).score, 0.0);
    // B has no points, so beating B is worth nothing on tie-break
    assert_eq!(roster.player(PlayerId(0)).tie_break, 0.0);

    stack.push(&mut roster, 1, 3, GameResult::Draw).unwrap();
    assert_eq!(roster.player(PlayerId(0)).score, 1.5);
    assert_eq!(roster.player(PlayerId(2)).score, 0.5);
    // A: 1 * B(0) + 0.5 * C(0.5)
    assert_eq!(roster.player(PlayerId(0)).tie_break, 0.25);
}

#[test]
fn test_count_between() {
    let mut roster = unplayed(&["a", "b", "c"]);
    let mut stack = SimulationStack::new();
    stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    stack.push(&mut roster, 2, 1, GameResult::Win).unwrap();
    stack.push(&mut roster, 1, 3, GameResult::Loss).unwrap();

    assert_eq!(stack.count_between(PlayerId(0), PlayerId(1)), 2);
    assert_eq!(stack.count_between(PlayerId(1), PlayerId(0)), 2);
    assert_eq!(stack.count_between(PlayerId(2), PlayerId(0)), 1);
    assert_eq!(stack.count_between(PlayerId(1), PlayerId(2)), 0);
}

#[test]
fn test_push_and_pop_refresh_stored_scores() {
    let mut roster = unplayed(&["a", "b", "c"]);
    let mut stack = SimulationStack::new();

    stack.push(&mut roster, 1, 2, GameResult::Win).unwrap();
    let a = roster.player(PlayerId(0));
    assert_eq!(a.score, compute_scores(&roster)[0]);
    assert_eq!(a.score, 1.0);

    stack.push(&mut roster, 2, 3, GameResult::Win).unwrap();
    // b now has a point, which feeds a's tie-break without a touching the board
    assert_eq!(roster.player(PlayerId(0)).tie_break, 1.0);

    stack.pop(&mut roster).unwrap();
    assert_eq!(roster.player(PlayerId(0)).tie_break, 0.0);
    assert_eq!(roster.player(PlayerId(1)).score, 0.0);
}
