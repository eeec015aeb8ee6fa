use core::fmt;
use smallvec::SmallVec;

/// Row and column offsets of the 4-neighbourhood, in expansion order: right, down, left, up.
const NEUMANN_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A position on the grid addressed by row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if the two cells differ by exactly one unit in exactly one coordinate.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The orthogonal neighbours of this cell. Neighbours with a negative coordinate are left
    /// out; the upper bounds are the grid's business.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                Some(Cell::new(
                    self.row.checked_add_signed(dr)?,
                    self.col.checked_add_signed(dc)?,
                ))
            })
            .collect()
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
