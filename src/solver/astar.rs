use crate::cell::Cell;
use crate::cost_grid::CostGrid;
use crate::solver::GridSolver;

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplies the Manhattan estimate. Values above 1.0 expand fewer cells but may return
    /// paths that are not the cheapest.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Manhattan distance to `goal`. Every step costs at least 1, except the final step into a goal
/// stored as an obstacle, which is free; that step is left out of the estimate.
pub fn manhattan_heuristic(grid: &CostGrid, cell: &Cell, goal: &Cell) -> u64 {
    let distance = cell.manhattan_distance(goal) as u64;
    if distance > 0 && grid.is_obstacle(*goal) {
        distance - 1
    } else {
        distance
    }
}

impl GridSolver for AstarSolver {
    /// Just the Manhattan estimate times the heuristic factor.
    fn heuristic(&self, grid: &CostGrid, cell: &Cell, goal: &Cell) -> u64 {
        let h = manhattan_heuristic(grid, cell, goal);
        if self.heuristic_factor == 1.0 {
            h
        } else {
            (h as f64 * self.heuristic_factor as f64) as u64
        }
    }
}
