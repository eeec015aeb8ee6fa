use weighted_grid_pathfinding::solver::{astar::AstarSolver, GridSolver};
use weighted_grid_pathfinding::{Cell, CostGrid, PathingGrid};

// Paths to whichever of two goals is cheaper to reach, then walls one of them off and asks
// again through a PathingGrid, which answers unreachable queries from its components.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let grid = CostGrid::from_rows(&[
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 1],
        vec![1, 3, 1, 0, 1],
        vec![1, 0, 1, 0, 9],
    ])?;
    let solver = AstarSolver::new();
    let start = Cell::new(0, 0);
    let goals = [Cell::new(3, 2), Cell::new(3, 4)];
    if let Some((goal, path)) = solver.get_path_multiple_goals(&grid, start, &goals)? {
        let cost = solver.get_path_cost(&grid, &path);
        println!("Selected goal {goal} at cost {cost}");
        println!("{}", grid.display_path(&path));
    }

    let mut pathing_grid = PathingGrid::new(grid);
    pathing_grid.set(Cell::new(2, 1), 0)?;
    pathing_grid.update();
    println!("{}", pathing_grid);
    match pathing_grid.get_path_single_goal(&solver, start, goals[0])? {
        Some(path) => println!("{}", pathing_grid.grid.display_path(&path)),
        None => println!("{} is not reachable from {}", goals[0], start),
    }
    Ok(())
}
