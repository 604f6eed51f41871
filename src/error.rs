//! Failure modes of the placement operation.

use thiserror::Error;

/// Errors returned by [`GameBoard::place_piece`](crate::GameBoard::place_piece).
///
/// Every variant leaves the board untouched: validation runs before any
/// cell or turn mutation, so callers can correct the input and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { column: i32, cols: usize },

    #[error("row hint {row} is out of range (board has {rows} rows)")]
    RowOutOfRange { row: i32, rows: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}
