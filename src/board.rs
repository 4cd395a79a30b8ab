use core::fmt;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use itertools::Itertools;
use log::{info, warn};

use crate::anchor::{Anchor, AnchorPair};
use crate::config::RouterConfig;
use crate::error::RouteError;
use crate::grid_vector::GridVector;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// The queries a [Path](crate::Path) makes while planning a step.
pub trait Occupancy {
    /// Whether a cell is claimed by an obstacle, an anchor or any wire.
    fn is_occupied(&self, point: &GridVector) -> bool;
    /// Whether some wire runs directly between the two cells.
    fn is_segment_occupied(&self, a: &GridVector, b: &GridVector) -> bool;
}

/// Identifies an [AnchorPair] by insertion order. Pairs are only ever removed all at once by
/// [Board::clear], so ids stay valid until then.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub usize);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// [Board] owns every anchor pair and standalone obstacle on a bounded grid and is the single
/// source of truth for which cells and edges are taken. Wires are routed one at a time in
/// order of descending weight, so a wire routed earlier is an obstacle for all later ones.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    pairs: Vec<AnchorPair>,
    obstacles: FxIndexSet<GridVector>,
    history: Vec<PairId>,
    pub config: RouterConfig,
}

impl Occupancy for Board {
    fn is_occupied(&self, point: &GridVector) -> bool {
        self.obstacles.contains(point)
            || self
                .pairs
                .iter()
                .any(|pair| pair.has_anchor_at(point) || pair.path.contains(point))
    }

    fn is_segment_occupied(&self, a: &GridVector, b: &GridVector) -> bool {
        self.pairs.iter().any(|pair| pair.path.has_segment(a, b))
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Board {
        Board::with_config(width, height, RouterConfig::default())
    }

    pub fn with_config(width: usize, height: usize, config: RouterConfig) -> Board {
        Board {
            width,
            height,
            pairs: Vec::new(),
            obstacles: FxIndexSet::default(),
            history: Vec::new(),
            config,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn centre(&self) -> GridVector {
        GridVector::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn in_bounds(&self, point: &GridVector) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn check_bounds(&self, point: &GridVector) -> Result<(), RouteError> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(RouteError::OutOfBounds {
                point: *point,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[AnchorPair] {
        &self.pairs
    }

    pub fn pair(&self, id: PairId) -> Result<&AnchorPair, RouteError> {
        self.pairs.get(id.0).ok_or(RouteError::UnknownPair(id))
    }

    pub fn pair_mut(&mut self, id: PairId) -> Result<&mut AnchorPair, RouteError> {
        self.pairs.get_mut(id.0).ok_or(RouteError::UnknownPair(id))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &GridVector> {
        self.obstacles.iter()
    }

    pub fn add_pair(&mut self, start: Anchor, end: Anchor) -> Result<PairId, RouteError> {
        self.check_bounds(&start.point)?;
        self.check_bounds(&end.point)?;
        self.pairs.push(AnchorPair::new(start, end));
        Ok(PairId(self.pairs.len() - 1))
    }

    /// Creates a pair between two cells with both anchors facing each other along the dominant
    /// axis.
    pub fn add_pair_at(&mut self, start: GridVector, end: GridVector) -> Result<PairId, RouteError> {
        let mut start_anchor = Anchor::new(start, GridVector::new(1, 0));
        let mut end_anchor = Anchor::new(end, GridVector::new(1, 0));
        start_anchor.auto_orient(end);
        end_anchor.auto_orient(start);
        self.add_pair(start_anchor, end_anchor)
    }

    /// Adds or removes a standalone obstacle and reports whether the obstacle set changed.
    /// Adding onto a cell that is already occupied by anything does nothing.
    pub fn set_occupied(&mut self, point: GridVector, occupied: bool) -> Result<bool, RouteError> {
        self.check_bounds(&point)?;
        if occupied {
            if self.is_occupied(&point) {
                return Ok(false);
            }
            Ok(self.obstacles.insert(point))
        } else {
            Ok(self.obstacles.shift_remove(&point))
        }
    }

    /// Flips the obstacle state of a cell, returning whether it now holds an obstacle.
    pub fn toggle_obstacle(&mut self, point: GridVector) -> Result<bool, RouteError> {
        if self.obstacles.contains(&point) {
            self.set_occupied(point, false)?;
            Ok(false)
        } else {
            self.set_occupied(point, true)
        }
    }

    /// Pair ids by descending path weight; equal weights keep insertion order.
    pub fn ordered_pairs(&self) -> Vec<PairId> {
        self.pairs
            .iter()
            .enumerate()
            .sorted_by(|(_, a), (_, b)| b.path.weight().total_cmp(&a.path.weight()))
            .map(|(ix, _)| PairId(ix))
            .collect()
    }

    /// Advances one pair by a single cell. Returns [false] if the pair was already complete.
    pub fn tick_pair(&mut self, id: PairId) -> Result<bool, RouteError> {
        let pair = self.pair(id)?;
        if pair.is_complete() {
            return Ok(false);
        }
        let step = pair
            .path
            .next_step(&pair.start, &pair.end, &*self, &self.config);
        let pair = &mut self.pairs[id.0];
        pair.path.push(step);
        if pair.is_complete() {
            info!("Pair {} complete after {} points", id, pair.path.len());
        }
        self.history.push(id);
        Ok(true)
    }

    /// Single-step mode: advances the first incomplete pair in priority order by one cell.
    pub fn step(&mut self) -> Option<PairId> {
        let id = self
            .ordered_pairs()
            .into_iter()
            .find(|id| !self.pairs[id.0].is_complete())?;
        self.tick_pair(id).ok()?;
        Some(id)
    }

    /// Routes every pair to completion, strictly one pair after the other in priority order,
    /// and returns the number of ticks taken. A pair that needs more than
    /// [step_limit](RouterConfig::step_limit) ticks stops the run; points routed so far stay.
    pub fn run_to_completion(&mut self) -> Result<usize, RouteError> {
        let mut total = 0;
        for id in self.ordered_pairs() {
            let mut steps = 0;
            while self.tick_pair(id)? {
                steps += 1;
                if steps >= self.config.step_limit && !self.pairs[id.0].is_complete() {
                    warn!("Pair {} still incomplete after {} steps", id, steps);
                    return Err(RouteError::StepLimitExceeded { pair: id, steps });
                }
            }
            total += steps;
        }
        info!("Routed {} pairs in {} steps", self.pairs.len(), total);
        Ok(total)
    }

    /// Removes the most recently routed point. Returns the pair it belonged to.
    pub fn undo_step(&mut self) -> Option<PairId> {
        while let Some(id) = self.history.pop() {
            if let Some(pair) = self.pairs.get_mut(id.0) {
                if pair.path.pop().is_some() {
                    return Some(id);
                }
            }
        }
        None
    }

    pub fn reset(&mut self, id: PairId) -> Result<(), RouteError> {
        self.pair_mut(id)?.path.reset();
        self.history.retain(|h| *h != id);
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for pair in self.pairs.iter_mut() {
            pair.path.reset();
        }
        self.history.clear();
    }

    /// Whether every wire on the board has reached its end anchor.
    pub fn is_complete(&self) -> bool {
        self.pairs.iter().all(|pair| pair.is_complete())
    }

    /// Moves the end anchor of a pair and re-orients both anchors toward the board centre.
    /// The routed points are kept.
    pub fn move_end(&mut self, id: PairId, point: GridVector) -> Result<(), RouteError> {
        self.check_bounds(&point)?;
        let centre = self.centre();
        let pair = self.pair_mut(id)?;
        pair.end.point = point;
        pair.orient_toward(centre);
        Ok(())
    }

    /// Rotates every anchor on `point` by 90 degrees. Returns whether any anchor was found.
    pub fn rotate_anchor_at(&mut self, point: GridVector) -> bool {
        let mut found = false;
        for pair in self.pairs.iter_mut() {
            for anchor in [&mut pair.start, &mut pair.end] {
                if anchor.point == point {
                    anchor.rotate_90();
                    found = true;
                }
            }
        }
        found
    }

    pub fn set_weight(&mut self, id: PairId, weight: f64) -> Result<(), RouteError> {
        self.pair_mut(id)?.path.set_weight(weight)
    }

    /// Removes all pairs and obstacles.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.obstacles.clear();
        self.history.clear();
    }

    fn cell_char(&self, point: &GridVector) -> char {
        if self.obstacles.contains(point) {
            return '#';
        }
        if self.pairs.iter().any(|p| p.start.point == *point) {
            return 'S';
        }
        if self.pairs.iter().any(|p| p.end.point == *point) {
            return 'E';
        }
        let mut found = None;
        for step in self.pairs.iter().flat_map(|p| p.path.steps()) {
            if step.point == *point {
                if !step.visible {
                    return 'x';
                }
                found = Some('o');
            }
        }
        found.unwrap_or('.')
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let row = (0..self.width as i32)
                .map(|x| self.cell_char(&GridVector::new(x, y)))
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
