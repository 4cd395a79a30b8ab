use wire_routing::{Board, GridVector};

// Creates a wire the way a pointer drag would and grows it one cell at a time, undoing the
// last step halfway through.

fn main() {
    let mut board = Board::new(16, 10);
    let id = board
        .add_pair_at(GridVector::new(1, 8), GridVector::new(14, 2))
        .unwrap();
    board.move_end(id, GridVector::new(13, 1)).unwrap();
    board.rotate_anchor_at(GridVector::new(1, 8));

    let mut ticks = 0;
    while let Some(id) = board.step() {
        ticks += 1;
        if ticks == 5 {
            board.undo_step();
            println!("Undid the last step of wire {}", id);
        }
        println!("{}", board);
    }
}
