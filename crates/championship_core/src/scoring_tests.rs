use super::*;
use crate::ingest::Crosstable;

fn roster(table: &Crosstable) -> Roster {
    Roster::from_crosstable(table).unwrap()
}

#[test]
fn test_scores_sum_results() {
    // alice beat bob twice, drew carol; bob beat carol
    let table = Crosstable::new(None)
        .with_player("alice", &["X", "1 1", "1/2"])
        .with_player("bob", &["0 0", "X", "1"])
        .with_player("carol", &["1/2", "0", "X"]);
    let roster = roster(&table);

    let scores = compute_scores(&roster);
    assert_eq!(scores, vec![2.5, 1.0, 0.5]);

    let tie_breaks = compute_tie_breaks(&roster, &scores);
    // alice: 1*1 + 1*1 + 0.5*0.5
    assert_eq!(tie_breaks[0], 2.25);
    // bob: 0*2.5 + 0*2.5 + 1*0.5
    assert_eq!(tie_breaks[1], 0.5);
    // carol: 0.5*2.5 + 0*1
    assert_eq!(tie_breaks[2], 1.25);
}

#[test]
fn test_empty_roster_scores() {
    let roster = roster(&Crosstable::unplayed(&["a", "b", "c"]));
    assert_eq!(compute_scores(&roster), vec![0.0; 3]);
    assert_eq!(compute_tie_breaks(&roster, &[0.0; 3]), vec![0.0; 3]);
}

#[test]
fn test_rank_assigns_and_orders() {
    let table = Crosstable::new(None)
        .with_player("alice", &["X", "0", ""])
        .with_player("bob", &["1", "X", ""])
        .with_player("carol", &["", "", "X"]);
    let mut roster = roster(&table);

    let order = rank(&mut roster);
    assert_eq!(order, vec![PlayerId(1), PlayerId(0), PlayerId(2)]);
    assert_eq!(roster.player(PlayerId(1)).score, 1.0);
    assert_eq!(roster.player(PlayerId(0)).score, 0.0);
}

#[test]
fn test_name_breaks_full_ties_ascending() {
    let mut roster = roster(&Crosstable::unplayed(&["dave", "bob", "carol", "alice"]));
    let order = rank(&mut roster);
    let names: Vec<&str> = order.iter().map(|id| roster.player(*id).name()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol", "dave"]);
}

#[test]
fn test_tie_break_separates_equal_scores() {
    // a and b both have 1 point; a beat c (1 point), b beat d (0 points)
    let table = Crosstable::new(None)
        .with_player("a", &["X", "", "1", ""])
        .with_player("b", &["", "X", "", "1"])
        .with_player("c", &["0", "", "X", "1"])
        .with_player("d", &["", "0", "0", "X"]);
    let mut roster = roster(&table);
    let order = rank(&mut roster);

    assert_eq!(roster.player(PlayerId(0)).score, 1.0);
    assert_eq!(roster.player(PlayerId(1)).score, 1.0);
    assert_eq!(roster.player(PlayerId(2)).score, 1.0);
    // a: 1 * c(1), c: 1 * d(0), b: 1 * d(0)
    assert_eq!(roster.player(PlayerId(0)).tie_break, 1.0);
    assert_eq!(order[0], PlayerId(0));
    // b and c tie on score and tie-break; name decides
    assert_eq!(order[1], PlayerId(1));
    assert_eq!(order[2], PlayerId(2));
    assert_eq!(order[3], PlayerId(3));
}

#[test]
fn test_rank_is_stable_across_runs() {
    let table = Crosstable::new(None)
        .with_player("x", &["X", "1/2", "1/2"])
        .with_player("y", &["1/2", "X", "1/2"])
        .with_player("z", &["1/2", "1/2", "X"]);
    let mut first = roster(&table);
    let mut second = roster(&table);
    assert_eq!(rank(&mut first), rank(&mut second));
    assert_eq!(rank(&mut first), standings_order(&first));
}
