use crate::grid_vector::GridVector;
use crate::path::Path;

/// An oriented endpoint of a wire. The direction is the heading a wire leaves the start anchor
/// with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub point: GridVector,
    pub direction: GridVector,
}

impl Anchor {
    pub fn new(point: GridVector, direction: GridVector) -> Anchor {
        Anchor { point, direction }
    }

    /// Faces the anchor along the dominant axis toward `target`. Ties go to the vertical axis and
    /// a zero offset counts as positive.
    pub fn auto_orient(&mut self, target: GridVector) {
        let delta = target - self.point;
        self.direction = if delta.x.abs() > delta.y.abs() {
            GridVector::new(delta.x.signum(), 0)
        } else if delta.y < 0 {
            GridVector::new(0, -1)
        } else {
            GridVector::new(0, 1)
        };
    }

    /// Rotates the facing by 90 degrees: (dx, dy) becomes (-dy, dx).
    pub fn rotate_90(&mut self) {
        self.direction = GridVector::new(-self.direction.y, self.direction.x);
    }
}

/// A start and end anchor together with the wire routed between them.
#[derive(Clone, Debug)]
pub struct AnchorPair {
    pub start: Anchor,
    pub end: Anchor,
    pub path: Path,
}

impl AnchorPair {
    pub fn new(start: Anchor, end: Anchor) -> AnchorPair {
        AnchorPair {
            start,
            end,
            path: Path::new(),
        }
    }

    pub fn orient_toward(&mut self, target: GridVector) {
        self.start.auto_orient(target);
        self.end.auto_orient(target);
    }

    pub fn is_complete(&self) -> bool {
        self.path.is_complete(&self.start, &self.end)
    }

    /// Whether either anchor sits on `point`.
    pub fn has_anchor_at(&self, point: &GridVector) -> bool {
        self.start.point == *point || self.end.point == *point
    }
}
