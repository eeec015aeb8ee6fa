use weighted_grid_pathfinding::solver::{astar::AstarSolver, GridSolver};
use weighted_grid_pathfinding::{find_path, Cell, CostGrid};

// In this example a path is found on a 3x3 grid with costs
//  _____
// |1 5 1|
// |1 0 1|
// |1 1 1|
//  _____
// where 0 marks an obstacle. The start is the top left cell and the goal the top right one.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let grid: CostGrid = "1 5 1\n1 0 1\n1 1 1".parse()?;
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(0, 2);
    match find_path(&grid, start, end)? {
        Some(path) => {
            let cost = AstarSolver::new().get_path_cost(&grid, &path);
            println!("Path (cost {cost}):");
            for p in &path {
                println!("{}", p);
            }
            println!("\n{}", grid.display_path(&path));
        }
        None => println!("No Path Found"),
    }
    Ok(())
}
