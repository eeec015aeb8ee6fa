use core::fmt;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::cost_grid::CostGrid;
use crate::error::Result;
use crate::solver::GridSolver;

/// [PathingGrid] keeps a [UnionFind] of the connected components of non-obstacle cells next to
/// the [CostGrid] itself, so that queries between different components are answered without
/// flood-filling the grid.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: CostGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Wraps `grid` and computes its components.
    pub fn new(grid: CostGrid) -> PathingGrid {
        let mut pathing_grid = PathingGrid {
            components: UnionFind::new(0),
            components_dirty: true,
            grid,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    /// Non-obstacle neighbours of `cell`.
    fn open_neighbours(&self, cell: &Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(move |n| !self.grid.is_obstacle(*n))
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.grid
            .contains(*cell)
            .then(|| self.components.find(self.grid.get_ix(*cell)))
    }

    /// Checks if the goal can be reached from the start. Both endpoints are enterable whatever
    /// their cost, so this holds when they coincide, touch, or have non-obstacle neighbours on a
    /// shared component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if !self.grid.contains(*start) || !self.grid.contains(*goal) {
            return false;
        }
        if start == goal || start.is_adjacent(goal) {
            return true;
        }
        let goal_components = self
            .open_neighbours(goal)
            .map(|n| self.components.find(self.grid.get_ix(n)))
            .collect::<SmallVec<[usize; 4]>>();
        self.open_neighbours(start)
            .any(|n| goal_components.contains(&self.components.find(self.grid.get_ix(n))))
    }

    /// Checks if the goal cannot be reached from the start.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Updates the cost of a cell. Opening a cell joins it to the components around it; closing
    /// one may split a component, so the components are flagged as dirty.
    pub fn set(&mut self, cell: Cell, cost: u32) -> Result<()> {
        let was_obstacle = self.grid.is_obstacle(cell);
        self.grid.set(cell, cost)?;
        if cost == 0 {
            if !was_obstacle {
                self.components_dirty = true;
            }
        } else if was_obstacle {
            let ix = self.grid.get_ix(cell);
            let neighbours = self
                .open_neighbours(&cell)
                .map(|n| self.grid.get_ix(n))
                .collect::<Vec<_>>();
            for n_ix in neighbours {
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.grid.rows() * self.grid.cols());
        for cell in self.grid.cells().filter(|c| !self.grid.is_obstacle(*c)) {
            let ix = self.grid.get_ix(cell);
            // Right and down suffice: the other two directions are covered from the other side.
            for n in [Cell::new(cell.row, cell.col + 1), Cell::new(cell.row + 1, cell.col)] {
                if !self.grid.is_obstacle(n) {
                    components.union(ix, self.grid.get_ix(n));
                }
            }
        }
        self.components = components;
        self.components_dirty = false;
    }

    /// Computes a path from start to goal with `solver`, returning `Ok(None)` straight away when
    /// the components show the goal is out of reach. Dirty components are not trusted.
    pub fn get_path_single_goal<S: GridSolver>(
        &self,
        solver: &S,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>> {
        self.grid.check_bounds(start)?;
        self.grid.check_bounds(goal)?;
        if !self.components_dirty && self.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let path = solver.get_path_single_goal(&self.grid, start, goal)?;
        if path.is_none() && !self.components_dirty {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        Ok(path)
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        write!(f, "{}", self.grid)?;
        writeln!(f, "\nComponents:")?;
        for row in 0..self.grid.rows() {
            let values = (0..self.grid.cols())
                .map(|col| Cell::new(row, col))
                .map(|c| {
                    if self.grid.is_obstacle(c) {
                        "-".to_owned()
                    } else {
                        self.get_component(&c).unwrap_or_default().to_string()
                    }
                })
                .collect::<Vec<_>>();
            writeln!(f, "{}", values.join(" "))?;
        }
        Ok(())
    }
}
