use grid_util::direction::Direction;
use log::warn;
use smallvec::SmallVec;

use crate::grid_vector::GridVector;

/// The [Direction] of a unit step, or [None] for the zero vector and anything longer than one
/// cell.
pub fn compass_direction(vector: GridVector) -> Option<Direction> {
    let direction = vector.abs_dir();
    (direction != Direction::NONE && GridVector::from(direction) == vector).then_some(direction)
}

/// Index of a vector in the compass cycle, following [Direction::num]. Adjacent indices are
/// 45 degrees apart. Anything other than one of the 8 unit steps is reported and yields
/// [None].
pub fn index_of(vector: GridVector) -> Option<usize> {
    let found = compass_direction(vector);
    if found.is_none() {
        warn!("{} is not a compass direction", vector);
    }
    found.map(|d| d.num() as usize)
}

/// The headings reachable from `vector` without turning more than 45 degrees: straight ahead
/// first, then the next and previous headings in the cycle. Empty for a vector that is not a
/// compass direction.
pub fn turn_neighborhood(vector: GridVector) -> SmallVec<[GridVector; 3]> {
    match compass_direction(vector) {
        Some(dir) => [dir, dir.rotate_cw(1), dir.rotate_ccw(1)]
            .into_iter()
            .map(GridVector::from)
            .collect(),
        None => {
            warn!("{} is not a compass direction", vector);
            SmallVec::new()
        }
    }
}

/// Number of 45 degree increments between two compass directions (0 to 4), or [None] if either
/// is off the compass.
pub fn turn_steps(from: GridVector, to: GridVector) -> Option<usize> {
    let angle = compass_direction(from)?.discrete_angle(compass_direction(to)?) as usize;
    Some(angle.min(8 - angle))
}
