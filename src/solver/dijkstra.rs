use crate::cell::Cell;
use crate::cost_grid::CostGrid;
use crate::solver::GridSolver;

/// Uninformed search: expands cells purely by cost from the start.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &CostGrid, _: &Cell, _: &Cell) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar::AstarSolver;

    #[test]
    fn agrees_with_astar() {
        let grid = CostGrid::from_rows(&[
            vec![1, 3, 1, 1, 2],
            vec![2, 0, 0, 7, 1],
            vec![1, 1, 4, 1, 1],
            vec![5, 0, 1, 0, 3],
        ])
        .unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(3, 4);
        let dijkstra_path = DijkstraSolver
            .get_path_single_goal(&grid, start, goal)
            .unwrap()
            .unwrap();
        let astar = AstarSolver::new();
        let astar_path = astar.get_path_single_goal(&grid, start, goal).unwrap().unwrap();
        assert_eq!(
            DijkstraSolver.get_path_cost(&grid, &dijkstra_path),
            astar.get_path_cost(&grid, &astar_path)
        );
    }
}
