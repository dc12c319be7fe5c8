use std::fmt;

use crate::Position;

/// Every disc a placement would turn over, in scan order.
/// Empty means the placement is illegal.
pub type FlipSet = Vec<Position>;

/// A legal placement together with the number of discs it flips.
///
/// Only meaningful alongside the board and side it was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: Position,
    pub flip_count: usize,
}

impl Move {
    pub fn new(position: Position, flip_count: usize) -> Self {
        Self { position, flip_count }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.position, self.flip_count)
    }
}
