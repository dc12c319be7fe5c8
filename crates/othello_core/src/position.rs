use std::fmt;
use std::str::FromStr;

use crate::ParseError;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,  // 0-7, top to bottom (printed as 1-8)
    pub col: u8,  // 0-7, left to right (printed as a-h)
}

impl Position {
    /// Panics if the coordinates are off the board; engine code never
    /// produces such a position.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "position ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn in_bounds(row: i8, col: i8) -> bool {
        (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
    }

    /// Row-major index in 0..64.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn from_index(index: usize) -> Self {
        assert!(index < BOARD_SIZE * BOARD_SIZE, "index {index} is off the board");
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Position::from_index)
    }

    /// The neighbouring square in `dir`, or `None` past the edge.
    pub fn step(self, dir: Direction) -> Option<Position> {
        Self::try_new(self.row as i8 + dir.d_row, self.col as i8 + dir.d_col)
    }

    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.trim().chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return None,
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            row: (rank as u8) - b'1',
            col: (file as u8) - b'a',
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s).ok_or_else(|| ParseError::InvalidPosition(s.to_string()))
    }
}

/// A compass step used when scanning for flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
    Direction::new(-1, -1),
];
