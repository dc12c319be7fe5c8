// Core Othello rules: board, legality, flips and move application
pub mod board;
pub mod disc;
pub mod error;
pub mod position;
pub mod moves;

// Re-export main types for convenience
pub use board::Board;
pub use disc::{Cell, Side};
pub use error::{MoveError, ParseError};
pub use position::{Direction, Position, BOARD_SIZE, DIRECTIONS};
pub use moves::{FlipSet, Move};
