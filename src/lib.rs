//! # wire_routing
//!
//! Incremental routing of wires between oriented anchors on a grid. Each wire is grown one
//! cell per tick by a greedy heuristic that never turns more than 45 degrees per step (except
//! when snapping onto its end anchor), prefers free cells, and refuses to slip diagonally
//! through another wire. Wires are routed one after another in order of descending weight and
//! every routed cell becomes an obstacle for the wires that follow. No optimality is implied:
//! when a wire cannot avoid a taken cell it crosses it anyway and marks that step as hidden.
//!
//! ```
//! use wire_routing::{Anchor, Board, GridVector};
//!
//! let mut board = Board::new(10, 10);
//! let start = Anchor::new(GridVector::new(0, 0), GridVector::new(1, 0));
//! let end = Anchor::new(GridVector::new(6, 0), GridVector::new(1, 0));
//! let id = board.add_pair(start, end).unwrap();
//! board.run_to_completion().unwrap();
//! assert_eq!(board.pair(id).unwrap().path.len(), 7);
//! ```
pub mod anchor;
pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid_vector;
pub mod path;

pub use anchor::{Anchor, AnchorPair};
pub use board::{Board, Occupancy, PairId};
pub use config::RouterConfig;
pub use direction::{compass_direction, index_of, turn_neighborhood, turn_steps};
pub use error::RouteError;
pub use grid_util::direction::Direction;
pub use grid_vector::{cosine_similarity, distance, GridVector};
pub use path::{is_blocked, straight_budget, Path, Step};

/// Score bonus for a candidate heading whose next cell is free.
pub const FREE_BONUS: f64 = 0.1;
/// Distance to the end anchor below which a wire stops scoring and heads straight for it.
pub const SNAP_DISTANCE: f64 = 5.0;
/// Default per-pair tick limit for [Board::run_to_completion].
pub const STEP_LIMIT: usize = 10_000;
