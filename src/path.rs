use itertools::Itertools;
use log::debug;

use crate::anchor::Anchor;
use crate::board::Occupancy;
use crate::config::RouterConfig;
use crate::direction::turn_neighborhood;
use crate::error::RouteError;
use crate::grid_vector::{cosine_similarity, distance, GridVector};

/// A single cell of a routed wire. Invisible steps were taken onto a cell that was already
/// claimed; they still count as occupied and only change how the wire is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub point: GridVector,
    pub visible: bool,
}

impl Step {
    pub fn new(point: GridVector) -> Step {
        Step {
            point,
            visible: true,
        }
    }

    pub fn hidden(point: GridVector) -> Step {
        Step {
            point,
            visible: false,
        }
    }
}

/// The wire between two anchors, built one cell per [tick](Path::tick).
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    steps: Vec<Step>,
    weight: f64,
}

impl Default for Path {
    fn default() -> Path {
        Path {
            steps: Vec::new(),
            weight: 1.0,
        }
    }
}

/// Whether moving from `point` in `direction` lands on an occupied cell or, for a diagonal move,
/// cuts through a segment joining the two corner cells.
pub fn is_blocked<O: Occupancy + ?Sized>(
    point: GridVector,
    direction: GridVector,
    occupancy: &O,
) -> bool {
    if occupancy.is_occupied(&(point + direction)) {
        return true;
    }
    let heading = direction.abs_dir();
    heading.diagonal()
        && occupancy.is_segment_occupied(&(point + heading.x_dir()), &(point + heading.y_dir()))
}

/// Number of initial steps the wire keeps the start anchor's heading: half the surplus of the
/// longer axis over the shorter one, halves rounded up.
pub fn straight_budget(start: &Anchor, end: &Anchor) -> usize {
    let delta = end.point - start.point;
    let excess = (delta.x.abs() - delta.y.abs()).unsigned_abs() as usize;
    (excess + 1) / 2
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn with_weight(weight: f64) -> Result<Path, RouteError> {
        let mut path = Path::new();
        path.set_weight(weight)?;
        Ok(path)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<(), RouteError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RouteError::InvalidWeight(weight));
        }
        self.weight = weight;
        Ok(())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn points(&self) -> impl Iterator<Item = GridVector> + '_ {
        self.steps.iter().map(|s| s.point)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_point(&self) -> Option<GridVector> {
        self.steps.last().map(|s| s.point)
    }

    pub fn contains(&self, point: &GridVector) -> bool {
        self.steps.iter().any(|s| s.point == *point)
    }

    /// Whether `a` and `b` follow each other (in either order) somewhere along the wire.
    pub fn has_segment(&self, a: &GridVector, b: &GridVector) -> bool {
        self.steps
            .iter()
            .tuple_windows()
            .any(|(p, q)| (p.point == *a && q.point == *b) || (p.point == *b && q.point == *a))
    }

    /// The unit heading of every move along the wire.
    pub fn directions(&self) -> Vec<GridVector> {
        self.steps
            .iter()
            .tuple_windows()
            .map(|(p, q)| p.point.dir(&q.point))
            .collect()
    }

    pub fn reset(&mut self) {
        self.steps.clear();
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn is_complete(&self, start: &Anchor, end: &Anchor) -> bool {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => {
                self.steps.len() >= 2 && first.point == start.point && last.point == end.point
            }
            _ => false,
        }
    }

    /// Heading of the last move, or the start anchor's facing before the wire has moved.
    fn last_direction(&self, start: &Anchor) -> GridVector {
        let n = self.steps.len();
        if n >= 2 {
            self.steps[n - 2].point.dir(&self.steps[n - 1].point)
        } else {
            start.direction
        }
    }

    /// Plans the next cell of the wire without modifying it.
    pub fn next_step<O: Occupancy + ?Sized>(
        &self,
        start: &Anchor,
        end: &Anchor,
        occupancy: &O,
        config: &RouterConfig,
    ) -> Step {
        let last = match self.last_point() {
            Some(last) => last,
            None => return Step::new(start.point),
        };
        let last_direction = self.last_direction(start);
        let target_direction = if self.steps.len() < straight_budget(start, end) {
            start.direction
        } else {
            last.dir(&end.point)
        };

        let mut direction = target_direction;
        let mut best_score = 0.0;
        for candidate in turn_neighborhood(last_direction) {
            let bonus = if is_blocked(last, candidate, occupancy) {
                0.0
            } else {
                config.free_bonus
            };
            let score = bonus + cosine_similarity(&candidate, &target_direction) + 1.0;
            if score > best_score {
                best_score = score;
                direction = candidate;
            }
        }

        if distance(&last, &end.point) < config.snap_distance {
            direction = target_direction;
        }

        let next = last + direction;
        let blocked = is_blocked(last, direction, occupancy);
        debug!(
            "{} -> {} (heading {}, target {}, blocked: {})",
            last, next, direction, target_direction, blocked
        );
        if blocked {
            Step::hidden(next)
        } else {
            Step::new(next)
        }
    }

    /// Advances the wire by one cell. Does nothing and returns [false] once complete.
    pub fn tick<O: Occupancy + ?Sized>(
        &mut self,
        start: &Anchor,
        end: &Anchor,
        occupancy: &O,
        config: &RouterConfig,
    ) -> bool {
        if self.is_complete(start, end) {
            return false;
        }
        let step = self.next_step(start, end, occupancy, config);
        self.steps.push(step);
        true
    }
}
