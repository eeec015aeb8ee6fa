//! # weighted_grid_pathfinding
//!
//! Minimum-cost pathfinding on a 4-connected grid where every cell carries the cost of entering
//! it and `0` marks an obstacle. Paths are found with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. A
//! [PathingGrid] additionally keeps the
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of the grid
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use weighted_grid_pathfinding::{find_path, Cell, CostGrid};
//!
//! let grid = CostGrid::from_rows(&[vec![1, 9, 1], vec![1, 1, 1]]).unwrap();
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(0, 2)).unwrap().unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod astar_core;
pub mod cell;
pub mod cost_grid;
pub mod error;
pub mod pathing_grid;
pub mod solver;

pub use cell::Cell;
pub use cost_grid::CostGrid;
pub use error::{GridError, Result};
pub use pathing_grid::PathingGrid;

use solver::{astar::AstarSolver, GridSolver};

/// Inline capacity of neighbourhood buffers; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// A sequence of 4-adjacent cells from start to goal, both included.
pub type Path = Vec<Cell>;

/// Finds a lowest-cost path from `start` to `goal`, where the cost of a path is the sum of the
/// costs of the cells it enters after `start`. Returns `Ok(None)` when no path exists and an
/// error when either cell lies outside the grid.
pub fn find_path(grid: &CostGrid, start: Cell, goal: Cell) -> Result<Option<Path>> {
    AstarSolver::new().get_path_single_goal(grid, start, goal)
}
