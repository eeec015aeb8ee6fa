//! Error types for grid construction and path queries.
//!
//! An unreachable goal is not an error: searches report it as `Ok(None)`.

use crate::cell::Cell;

/// Result type alias
pub type Result<T> = std::result::Result<T, GridError>;

/// Invalid input detected before any search work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid has no rows or no columns
    #[error("grid must have at least one row and one column")]
    Empty,

    /// A row differs in length from the first row
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A cell holds a negative traversal cost
    #[error("cell {cell} has negative cost {value}")]
    NegativeCost { cell: Cell, value: i64 },

    /// A cell holds a cost that does not fit the grid's storage
    #[error("cell {cell} has cost {value}, which exceeds {max}", max = u32::MAX)]
    CostTooLarge { cell: Cell, value: i64 },

    /// A query cell lies outside the grid
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    /// A multi-goal query was given no goals
    #[error("at least one goal is required")]
    NoGoals,

    /// Textual grid input could not be parsed
    #[error("line {line}: cannot parse {token:?} as a cost")]
    Parse { line: usize, token: String },
}
