/// Fuzzes the router by routing many random boards to completion and checking the invariants
/// every finished board must satisfy: wires connect their anchors, scored steps never turn
/// more than 45 degrees, no two wires cross diagonally while both being drawn, and routing is
/// deterministic.
use rand::prelude::*;
use wire_routing::{distance, turn_steps, AnchorPair, Board, GridVector, Step, SNAP_DISTANCE};
use wire_routing_scenarios::{random_board, scatter_obstacles};

fn random_routed_board(rng: &mut StdRng, obstacles: bool) -> (Board, Board) {
    let mut board = random_board(16, 12, rng).unwrap();
    if obstacles {
        scatter_obstacles(&mut board, 0.1, rng).unwrap();
    }
    let unrouted = board.clone();
    if let Err(e) = board.run_to_completion() {
        println!("{board}");
        panic!("{e}");
    }
    (unrouted, board)
}

/// Checks every move planned by scoring, i.e. taken at least [SNAP_DISTANCE] away from the end
/// anchor.
fn assert_turns_within_45_degrees(pair: &AnchorPair) {
    let steps = pair.path.steps();
    for k in 0..steps.len() - 1 {
        let here = steps[k].point;
        if distance(&here, &pair.end.point) < SNAP_DISTANCE {
            continue;
        }
        let last_direction = if k == 0 {
            pair.start.direction
        } else {
            steps[k - 1].point.dir(&here)
        };
        let direction = here.dir(&steps[k + 1].point);
        if let Some(turn) = turn_steps(last_direction, direction) {
            assert!(turn <= 1, "turn of {turn} at {here} in {:?}", pair.path);
        }
    }
}

/// Diagonal moves as (from, to, drawn).
fn diagonal_moves(board: &Board) -> Vec<(GridVector, GridVector, bool)> {
    board
        .pairs()
        .iter()
        .flat_map(|pair| pair.path.steps().windows(2))
        .filter(|w| w[0].point.dir_obj(&w[1].point).diagonal())
        .map(|w: &[Step]| (w[0].point, w[1].point, w[1].visible))
        .collect()
}

fn assert_no_drawn_crossings(board: &Board) {
    let moves = diagonal_moves(board);
    for (a, b, a_visible) in &moves {
        let heading = a.dir_obj(b);
        let corners = [*a + heading.x_dir(), *a + heading.y_dir()];
        for (c, d, c_visible) in &moves {
            let crosses = (*c == corners[0] && *d == corners[1])
                || (*c == corners[1] && *d == corners[0]);
            if crosses {
                assert!(
                    !(*a_visible && *c_visible),
                    "{a}->{b} and {c}->{d} cross while both drawn\n{board}"
                );
            }
        }
    }
}

#[test]
fn fuzz() {
    const N_BOARDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for obstacles in [false, true] {
        for _ in 0..N_BOARDS {
            let (_, board) = random_routed_board(&mut rng, obstacles);
            assert!(board.is_complete());
            for pair in board.pairs() {
                let first = pair.path.steps().first().unwrap();
                assert_eq!(first.point, pair.start.point);
                assert_eq!(pair.path.last_point(), Some(pair.end.point));
                assert_turns_within_45_degrees(pair);
            }
            assert_no_drawn_crossings(&board);
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N_BOARDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_BOARDS {
        let (mut unrouted, mut board) = random_routed_board(&mut rng, true);
        let first_run = board.clone();

        board.reset_all();
        board.run_to_completion().unwrap();
        unrouted.run_to_completion().unwrap();
        for ((a, b), c) in first_run
            .pairs()
            .iter()
            .zip(board.pairs())
            .zip(unrouted.pairs())
        {
            assert_eq!(a.path, b.path);
            assert_eq!(a.path, c.path);
        }
    }
}

/// Single-stepping must produce the same wires as a full run.
#[test]
fn fuzz_single_step_matches_full_run() {
    const N_BOARDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_BOARDS {
        let (mut unrouted, board) = random_routed_board(&mut rng, true);
        while unrouted.step().is_some() {}
        for (a, b) in board.pairs().iter().zip(unrouted.pairs()) {
            assert_eq!(a.path, b.path);
        }
    }
}

#[test]
fn fuzz_undo() {
    const N_BOARDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..N_BOARDS {
        let (_, mut board) = random_routed_board(&mut rng, false);
        while board.undo_step().is_some() {}
        assert!(board.pairs().iter().all(|pair| pair.path.is_empty()));
    }
}
