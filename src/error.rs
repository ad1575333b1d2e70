use thiserror::Error;

/// Errors that can occur while building game states or searching them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinimaxError {
    #[error("No legal actions available")]
    NoLegalActions,

    #[error("Grid must have 3 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("Row {row} must have 3 cells, got {len}")]
    InvalidRowLength { row: usize, len: usize },

    #[error("Invalid cell symbol: {0:?}")]
    InvalidCell(char),

    #[error("Cell ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Convenience Result type for minimax operations.
pub type Result<T> = std::result::Result<T, MinimaxError>;
