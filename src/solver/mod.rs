use itertools::Itertools;
use smallvec::SmallVec;

use crate::astar_core;
use crate::cell::Cell;
use crate::cost_grid::CostGrid;
use crate::error::{GridError, Result};
use crate::N_SMALLVEC_SIZE;

pub mod astar;
pub mod dijkstra;

pub trait GridSolver {
    /// Estimate of the remaining cost from `cell` to `goal`.
    fn heuristic(&self, grid: &CostGrid, cell: &Cell, goal: &Cell) -> u64;

    /// Enterable neighbours of `cell` and the cost of entering each. `is_goal` marks cells that
    /// are enterable regardless of their stored cost.
    fn successors<F>(
        &self,
        grid: &CostGrid,
        cell: &Cell,
        is_goal: &F,
    ) -> SmallVec<[(Cell, u64); N_SMALLVEC_SIZE]>
    where
        F: Fn(&Cell) -> bool,
    {
        grid.neighborhood_cells_and_cost(cell, is_goal)
    }

    /// Sum of the costs of every cell entered after the first one.
    fn get_path_cost(&self, grid: &CostGrid, path: &[Cell]) -> u64 {
        path.iter()
            .skip(1)
            .filter_map(|c| grid.get(*c))
            .map(u64::from)
            .sum()
    }

    /// Checks that `path` is non-empty, stays on the grid, moves between 4-adjacent cells and
    /// only enters obstacles at its endpoints.
    fn is_valid_path(&self, grid: &CostGrid, path: &[Cell]) -> bool {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return false;
        };
        path.iter().all(|c| grid.contains(*c))
            && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
            && path
                .iter()
                .all(|c| c == first || c == last || !grid.is_obstacle(*c))
    }

    /// Computes a lowest-cost path from start to goal. Returns `Ok(None)` if the goal cannot be
    /// reached and an error if either cell lies outside the grid.
    fn get_path_single_goal(
        &self,
        grid: &CostGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        Ok(astar_core::astar(
            &start,
            |cell| self.successors(grid, cell, &|c| *c == goal),
            |cell| self.heuristic(grid, cell, &goal),
            |cell| *cell == goal,
        )
        .map(|(path, _cost)| path))
    }

    /// Computes a path from the start to the cheapest of the given goals and returns the
    /// selected goal in addition to the found path. Otherwise behaves like
    /// [get_path_single_goal](Self::get_path_single_goal).
    fn get_path_multiple_goals(
        &self,
        grid: &CostGrid,
        start: Cell,
        goals: &[Cell],
    ) -> Result<Option<(Cell, Vec<Cell>)>> {
        if goals.is_empty() {
            return Err(GridError::NoGoals);
        }
        grid.check_bounds(start)?;
        for goal in goals {
            grid.check_bounds(*goal)?;
        }
        let result = astar_core::astar(
            &start,
            |cell| self.successors(grid, cell, &|c| goals.contains(c)),
            |cell| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(grid, cell, goal))
                    .min()
                    .unwrap_or(0)
            },
            |cell| goals.contains(cell),
        );
        Ok(result.and_then(|(path, _cost)| Some((*path.last()?, path))))
    }
}

#[cfg(test)]
mod tests {
    use super::astar::AstarSolver;
    use super::*;

    #[test]
    fn path_cost_skips_start() {
        let grid = CostGrid::from_rows(&[vec![9, 2, 3]]).unwrap();
        let solver = AstarSolver::new();
        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        assert_eq!(solver.get_path_cost(&grid, &path), 5);
        assert_eq!(solver.get_path_cost(&grid, &path[..1]), 0);
    }

    #[test]
    fn path_validation() {
        // |1 0 1|
        // |1 1 1|
        let grid = CostGrid::from_rows(&[vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
        let solver = AstarSolver::new();
        let cells = |v: &[(usize, usize)]| v.iter().map(|&p| Cell::from(p)).collect::<Vec<_>>();
        assert!(solver.is_valid_path(&grid, &cells(&[(0, 0), (1, 0), (1, 1), (1, 2)])));
        assert!(solver.is_valid_path(&grid, &cells(&[(0, 0), (0, 1)])));
        assert!(!solver.is_valid_path(&grid, &cells(&[(0, 0), (0, 1), (0, 2)])));
        assert!(!solver.is_valid_path(&grid, &cells(&[(0, 0), (1, 1)])));
        assert!(!solver.is_valid_path(&grid, &cells(&[(1, 2), (1, 3)])));
        assert!(!solver.is_valid_path(&grid, &[]));
    }

    #[test]
    fn empty_goal_list() {
        let grid = CostGrid::new(2, 2, 1).unwrap();
        let solver = AstarSolver::new();
        assert_eq!(
            solver.get_path_multiple_goals(&grid, Cell::new(0, 0), &[]),
            Err(GridError::NoGoals)
        );
    }
}
