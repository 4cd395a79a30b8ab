use crate::{FREE_BONUS, SNAP_DISTANCE, STEP_LIMIT};

/// Tunables of the routing heuristic. The defaults reproduce the reference behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouterConfig {
    /// Score added to a candidate direction whose target cell is free.
    pub free_bonus: f64,
    /// Below this Euclidean distance to the end anchor, scoring is skipped and the path heads
    /// straight for it.
    pub snap_distance: f64,
    /// Maximum ticks a single pair may take during [run_to_completion](crate::Board::run_to_completion).
    pub step_limit: usize,
}

impl Default for RouterConfig {
    fn default() -> RouterConfig {
        RouterConfig {
            free_bonus: FREE_BONUS,
            snap_distance: SNAP_DISTANCE,
            step_limit: STEP_LIMIT,
        }
    }
}
