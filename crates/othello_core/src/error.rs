use thiserror::Error;

use crate::{Position, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The target square is occupied or the placement flips nothing.
    #[error("illegal move: {side} cannot play {position}")]
    IllegalMove { position: Position, side: Side },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square `{0}`, expected a letter a-h followed by a digit 1-8")]
    InvalidPosition(String),
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown cell character `{0}`")]
    InvalidCell(char),
}
