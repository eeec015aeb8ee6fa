use core::fmt;
use core::str::FromStr;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::N_SMALLVEC_SIZE;

/// A rectangular matrix of traversal costs. A value of `0` marks an obstacle; any other value is
/// the cost of entering the cell. Construction validates the shape and the values, so every
/// [CostGrid] is well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostGrid {
    rows: usize,
    cols: usize,
    costs: Vec<u32>,
}

impl CostGrid {
    /// Creates a `rows` by `cols` grid filled with `default_cost`.
    pub fn new(rows: usize, cols: usize, default_cost: u32) -> Result<CostGrid> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(CostGrid {
            rows,
            cols,
            costs: vec![default_cost; rows * cols],
        })
    }

    /// Builds a grid from row-major values, rejecting empty, ragged and negative input.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<CostGrid> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = CostGrid::new(rows.len(), cols, 0)?;
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::new(row, col);
                if value < 0 {
                    return Err(GridError::NegativeCost { cell, value });
                }
                let cost =
                    u32::try_from(value).map_err(|_| GridError::CostTooLarge { cell, value })?;
                let ix = grid.get_ix(cell);
                grid.costs[ix] = cost;
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn get_ix(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row * self.cols + cell.col
    }

    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.contains(cell).then(|| self.costs[self.get_ix(cell)])
    }

    pub fn set(&mut self, cell: Cell, cost: u32) -> Result<()> {
        self.check_bounds(cell)?;
        let ix = self.get_ix(cell);
        self.costs[ix] = cost;
        Ok(())
    }

    /// Out-of-bounds cells count as obstacles.
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.get(cell).map_or(true, |c| c == 0)
    }

    /// In-bounds cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Neighbours of `cell` that may be entered, paired with the cost of entering them.
    /// Obstacles are skipped unless `is_goal` accepts them, so a goal stored as `0` is entered
    /// for free.
    pub fn neighborhood_cells_and_cost<F>(
        &self,
        cell: &Cell,
        is_goal: &F,
    ) -> SmallVec<[(Cell, u64); N_SMALLVEC_SIZE]>
    where
        F: Fn(&Cell) -> bool,
    {
        cell.neumann_neighborhood()
            .into_iter()
            .filter_map(|n| {
                let cost = self.get(n)?;
                (cost != 0 || is_goal(&n)).then_some((n, cost as u64))
            })
            .collect()
    }

    /// Wraps the grid so that formatting overlays `path` on it.
    pub fn display_path<'a>(&'a self, path: &'a [Cell]) -> PathOverlay<'a> {
        PathOverlay { grid: self, path }
    }
}

/// Parses whitespace-separated costs, one row per non-blank line.
impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<CostGrid> {
        let rows = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_ix, line)| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse::<i64>().map_err(|_| GridError::Parse {
                            line: line_ix + 1,
                            token: token.to_owned(),
                        })
                    })
                    .collect::<Result<Vec<i64>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        CostGrid::from_rows(&rows)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.costs.chunks(self.cols) {
            let values = row.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            writeln!(f, "{}", values.join(" "))?;
        }
        Ok(())
    }
}

/// Text rendering of a path on a grid: `S` start, `G` goal, `*` path cells, `#` obstacles and
/// `.` everything else.
pub struct PathOverlay<'a> {
    grid: &'a CostGrid,
    path: &'a [Cell],
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = self.path.first();
        let goal = self.path.last();
        for row in 0..self.grid.rows {
            for col in 0..self.grid.cols {
                let cell = Cell::new(row, col);
                let c = if start == Some(&cell) {
                    'S'
                } else if goal == Some(&cell) {
                    'G'
                } else if self.path.contains(&cell) {
                    '*'
                } else if self.grid.is_obstacle(cell) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
