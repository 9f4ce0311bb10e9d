//! A* pathfinding over square obstacle grids.
//!
//! [`Pathfinder`] builds a dense per-cell node table from any
//! [`ObstacleGrid`](waygrid_core::ObstacleGrid) and recomputes the
//! lowest-cost path between a start and an end cell whenever either
//! endpoint moves:
//!
//! - movement is 8-directional (diagonals allowed);
//! - the heuristic is true Euclidean distance in world units
//!   (cell coordinates scaled by the configured cell size);
//! - per-cell traversal costs come from an injectable [`CostModel`];
//! - endpoints can be set in cell or pixel coordinates ([`Unit`]).
//!
//! Paths are returned in goal→start order, goal included and start
//! excluded. A search that exhausts the frontier yields an empty path
//! ([`SearchOutcome::NoPath`]); out-of-grid endpoints skip the search and
//! leave the previous path in place ([`SearchOutcome::InvalidPosition`]).

mod astar;
mod cost;
mod distance;
mod pathfinder;
mod table;

pub use cost::{CostModel, RandomCost, UniformCost};
pub use distance::{chebyshev, euclidean};
pub use pathfinder::{DEFAULT_CELL_SIZE, Pathfinder, SearchOutcome, Unit};
