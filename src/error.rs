use thiserror::Error;

use crate::board::PairId;
use crate::grid_vector::GridVector;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("point {point} lies outside the {width}x{height} board")]
    OutOfBounds {
        point: GridVector,
        width: usize,
        height: usize,
    },
    #[error("no anchor pair with id {0}")]
    UnknownPair(PairId),
    #[error("path weight must be finite and positive, got {0}")]
    InvalidWeight(f64),
    /// The heuristic has no termination bound of its own, so full runs are cut off instead.
    #[error("pair {pair} did not complete within {steps} steps")]
    StepLimitExceeded { pair: PairId, steps: usize },
}
