use wire_routing::{Anchor, Board, GridVector};

// Two wires on a 12x8 board, the heavier one routed first:
//  ____________
// |            |
// |S          E|   wire 0, weight 2
// |     #      |
// |            |
// |   S        |   wire 1 starts here facing south...
// |            |
// |            |
// |   E        |   ...and ends here
//  ____________
// where # marks an obstacle.

fn main() {
    let mut board = Board::new(12, 8);
    let east = GridVector::new(1, 0);
    let south = GridVector::new(0, 1);
    let top = board
        .add_pair(
            Anchor::new(GridVector::new(0, 1), east),
            Anchor::new(GridVector::new(11, 1), east),
        )
        .unwrap();
    board
        .add_pair(
            Anchor::new(GridVector::new(3, 4), south),
            Anchor::new(GridVector::new(3, 7), south),
        )
        .unwrap();
    board.set_weight(top, 2.0).unwrap();
    board.set_occupied(GridVector::new(5, 2), true).unwrap();

    let steps = board.run_to_completion().unwrap();
    println!("Routed in {} steps:", steps);
    println!("{}", board);
    for pair in board.pairs() {
        println!("Wire (weight {}):", pair.path.weight());
        for step in pair.path.steps() {
            println!("{:?}", step);
        }
    }
}
