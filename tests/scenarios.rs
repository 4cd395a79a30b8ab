use wire_routing::{Board, GridVector, PairId, Step};
use wire_routing_scenarios::get_scenario;

fn routed(name: &str) -> Board {
    let mut board = get_scenario(name).unwrap();
    board.run_to_completion().unwrap();
    board
}

fn points(board: &Board, id: usize) -> Vec<GridVector> {
    board.pairs()[id].path.points().collect()
}

fn hidden(board: &Board, id: usize) -> Vec<GridVector> {
    board.pairs()[id]
        .path
        .steps()
        .iter()
        .filter(|s| !s.visible)
        .map(|s| s.point)
        .collect()
}

#[test]
fn straight() {
    let board = routed("straight");
    let expected = (0..=6).map(|x| GridVector::new(x, 1)).collect::<Vec<_>>();
    assert_eq!(points(&board, 0), expected);
    assert_eq!(hidden(&board, 0), vec![GridVector::new(6, 1)]);
}

#[test]
fn diagonal() {
    let board = routed("diagonal");
    let expected = (0..=3).map(|i| GridVector::new(i, i)).collect::<Vec<_>>();
    assert_eq!(points(&board, 0), expected);
}

/// An obstacle on the only straight line does not stop the wire short.
#[test]
fn blocked_straight() {
    let board = routed("blocked_straight");
    let pair = &board.pairs()[0];
    assert!(pair.is_complete());
    let obstacle = GridVector::new(3, 2);
    let deviated = pair.path.points().any(|p| p.y != 2);
    assert!(deviated || hidden(&board, 0).contains(&obstacle));
}

/// The heavier wire is routed first and is drawn up to its end anchor; the lighter one is also
/// hidden where it has to cross.
#[test]
fn crossing_respects_priority() {
    let a_end = GridVector::new(11, 5);
    let b_end = GridVector::new(5, 11);
    let cross = GridVector::new(5, 5);

    let board = routed("crossing");
    assert_eq!(hidden(&board, 0), vec![a_end]);
    assert_eq!(hidden(&board, 1), vec![cross, b_end]);

    let mut swapped = get_scenario("crossing").unwrap();
    swapped.set_weight(PairId(1), 3.0).unwrap();
    assert_eq!(swapped.ordered_pairs(), vec![PairId(1), PairId(0)]);
    swapped.run_to_completion().unwrap();
    assert_eq!(hidden(&swapped, 1), vec![b_end]);
    assert_eq!(hidden(&swapped, 0), vec![cross, a_end]);
}

#[test]
fn parallel_bus() {
    let board = routed("bus");
    for (id, y) in [(0, 1), (1, 3), (2, 5)] {
        let expected = (0..=15).map(|x| GridVector::new(x, y)).collect::<Vec<_>>();
        assert_eq!(points(&board, id), expected);
        assert_eq!(hidden(&board, id), vec![GridVector::new(15, y)]);
    }
}

/// A wire leaving its start facing away from the end turns around and still arrives.
#[test]
fn hairpin() {
    let board = routed("hairpin");
    let pair = &board.pairs()[0];
    assert!(pair.is_complete());
    assert_eq!(pair.path.steps()[1], Step::new(GridVector::new(7, 3)));
}

#[test]
fn reset_then_rerun_is_identical() {
    let mut board = routed("crossing");
    let first = board.clone();
    board.reset_all();
    assert!(!board.is_complete());
    assert!(board.pairs().iter().all(|p| p.path.is_empty()));
    board.run_to_completion().unwrap();
    for (a, b) in first.pairs().iter().zip(board.pairs()) {
        assert_eq!(a.path, b.path);
    }
}
