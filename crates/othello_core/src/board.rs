use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::{Cell, Direction, FlipSet, Move, MoveError, ParseError, Position, Side, BOARD_SIZE, DIRECTIONS};

/// An 8x8 Othello board.
///
/// Boards are plain values: `apply_move` hands back a new board and leaves
/// the original untouched, so search code can branch freely on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout. Black moves first.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn setup_initial_position(&mut self) {
        self.set(Position::new(3, 3), Cell::White);
        self.set(Position::new(3, 4), Cell::Black);
        self.set(Position::new(4, 3), Cell::Black);
        self.set(Position::new(4, 4), Cell::White);
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Returns a copy with `pos` overwritten. Intended for building
    /// arbitrary positions; it bypasses the rules entirely.
    pub fn with_cell(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    pub fn disc_count(&self, side: Side) -> usize {
        let cell = side.cell();
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn total_discs(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.total_discs() == BOARD_SIZE * BOARD_SIZE
    }

    /// Discs `side` would flip by playing at `pos`. Empty when `pos` is
    /// occupied or nothing is bracketed.
    pub fn compute_flips(&self, pos: Position, side: Side) -> FlipSet {
        let mut flips = FlipSet::new();
        if !self.get(pos).is_empty() {
            return flips;
        }

        for dir in DIRECTIONS {
            self.collect_run(pos, side, dir, &mut flips);
        }

        flips
    }

    // Appends the bracketed opponent run in `dir`, if the run ends on one of
    // our own discs.
    fn collect_run(&self, pos: Position, side: Side, dir: Direction, flips: &mut FlipSet) {
        let own = side.cell();
        let opponent = side.opponent().cell();
        let start = flips.len();

        let mut current = pos.step(dir);
        while let Some(p) = current {
            match self.get(p) {
                c if c == opponent => {
                    flips.push(p);
                    current = p.step(dir);
                }
                c if c == own => return,
                _ => break,
            }
        }

        // Ran off the board or into an empty square
        flips.truncate(start);
    }

    pub fn is_legal(&self, pos: Position, side: Side) -> bool {
        !self.compute_flips(pos, side).is_empty()
    }

    /// All legal moves for `side`, in row-major order.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        Position::all()
            .filter(|&pos| self.get(pos).is_empty())
            .filter_map(|pos| {
                let flips = self.compute_flips(pos, side);
                if flips.is_empty() {
                    None
                } else {
                    Some(Move::new(pos, flips.len()))
                }
            })
            .collect()
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        Position::all().any(|pos| self.is_legal(pos, side))
    }

    /// Plays `mv` for `side` and returns the resulting board.
    ///
    /// Only `mv.position` is consulted; flips are recomputed against this
    /// board.
    pub fn apply_move(&self, mv: Move, side: Side) -> Result<Board, MoveError> {
        self.play(mv.position, side)
    }

    pub fn play(&self, pos: Position, side: Side) -> Result<Board, MoveError> {
        let flips = self.compute_flips(pos, side);
        if flips.is_empty() {
            return Err(MoveError::IllegalMove { position: pos, side });
        }

        let mut next = *self;
        next.set(pos, side.cell());
        for &p in &flips {
            next.set(p, side.cell());
        }
        trace!("{} plays {}, flipping {}", side, pos, flips.len());

        Ok(next)
    }

    /// True when neither side can move. Does not depend on whose turn it is.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || (!self.has_legal_move(Side::Black) && !self.has_legal_move(Side::White))
    }

    /// The side with more discs, or `None` on a draw.
    pub fn winner(&self) -> Option<Side> {
        let black = self.disc_count(Side::Black);
        let white = self.disc_count(Side::White);
        if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in cells {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses 8 non-blank lines of 8 cells each. Whitespace inside a line is
    /// ignored, so both `"..BW...."` and `". . B W . . . ."` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != BOARD_SIZE {
                return Err(ParseError::RowLength { row, len: chars.len() });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or(ParseError::InvalidCell(c))?;
                board.set(Position::new(row as u8, col as u8), cell);
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.get(Position::new(3, 3)), Cell::White);
        assert_eq!(board.get(Position::new(3, 4)), Cell::Black);
        assert_eq!(board.get(Position::new(4, 3)), Cell::Black);
        assert_eq!(board.get(Position::new(4, 4)), Cell::White);
        assert_eq!(board.disc_count(Side::Black), 2);
        assert_eq!(board.disc_count(Side::White), 2);
        assert_eq!(board.total_discs(), 4);
    }

    #[test]
    fn test_opening_moves() {
        let moves = Board::new().legal_moves(Side::Black);
        let expected = vec![
            Move::new(Position::new(2, 3), 1),
            Move::new(Position::new(3, 2), 1),
            Move::new(Position::new(4, 5), 1),
            Move::new(Position::new(5, 4), 1),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_compute_flips_single_direction() {
        let board = Board::new();
        assert_eq!(board.compute_flips(pos("d3"), Side::Black), vec![pos("d4")]);
        assert!(board.compute_flips(pos("a1"), Side::Black).is_empty());
    }

    #[test]
    fn test_compute_flips_occupied_is_empty() {
        let board = Board::new();
        assert!(board.compute_flips(Position::new(3, 3), Side::Black).is_empty());
        assert!(board.compute_flips(Position::new(3, 4), Side::White).is_empty());
    }

    #[test]
    fn test_compute_flips_multiple_directions() {
        let board: Board = "
            B.B.B...
            .WWW....
            BW.WB...
            .WWW....
            B.B.B...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        let flips = board.compute_flips(Position::new(2, 2), Side::Black);
        assert_eq!(flips.len(), 8);
        // Scan order is N, NE, E, SE, S, SW, W, NW
        assert_eq!(flips[0], Position::new(1, 2));
        assert_eq!(flips[7], Position::new(1, 1));
    }

    #[test]
    fn test_run_must_end_on_own_disc() {
        let board: Board = "
            .WWW....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        assert!(board.compute_flips(Position::new(0, 0), Side::Black).is_empty());
        assert!(board.compute_flips(Position::new(0, 4), Side::Black).is_empty());

        let bracketed = board.with_cell(Position::new(0, 4), Cell::Black);
        assert_eq!(bracketed.compute_flips(Position::new(0, 0), Side::Black).len(), 3);
    }

    #[test]
    fn test_apply_move_places_and_flips() {
        let board = Board::new();
        let mv = Move::new(pos("d3"), 1);
        let next = board.apply_move(mv, Side::Black).unwrap();

        assert_eq!(next.get(pos("d3")), Cell::Black);
        assert_eq!(next.get(pos("d4")), Cell::Black);
        assert_eq!(next.disc_count(Side::Black), 4);
        assert_eq!(next.disc_count(Side::White), 1);
        // Input board is untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = Board::new();
        let mv = Move::new(Position::new(3, 3), 1);
        assert_eq!(
            board.apply_move(mv, Side::Black),
            Err(MoveError::IllegalMove { position: Position::new(3, 3), side: Side::Black })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_rejects_no_flips() {
        let board = Board::new();
        let err = board.play(pos("a1"), Side::White).unwrap_err();
        assert_eq!(err, MoveError::IllegalMove { position: pos("a1"), side: Side::White });
        assert_eq!(err.to_string(), "illegal move: White cannot play a1");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_full_board() {
        let rows = "BBBBBBBB\n".repeat(5) + &"WWWWWWWW\n".repeat(3);
        let board: Board = rows.parse().unwrap();
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Side::Black));
    }

    #[test]
    fn test_terminal_no_moves_for_either_side() {
        let board = Board::empty()
            .with_cell(Position::new(0, 0), Cell::Black)
            .with_cell(Position::new(7, 7), Cell::White);
        assert!(!board.is_full());
        assert!(board.legal_moves(Side::Black).is_empty());
        assert!(board.legal_moves(Side::White).is_empty());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_one_side_blocked_is_not_terminal() {
        let board = Board::empty()
            .with_cell(Position::new(0, 0), Cell::Black)
            .with_cell(Position::new(0, 1), Cell::White);
        assert_eq!(board.legal_moves(Side::Black), vec![Move::new(Position::new(0, 2), 1)]);
        assert!(!board.has_legal_move(Side::White));
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_display_and_parse() {
        let board = Board::new();
        let text = board.to_string();
        assert!(text.starts_with("  a b c d e f g h\n"));
        assert!(text.contains("4 . . . W B . . .\n"));

        let grid: String = text.lines().skip(1).map(|line| format!("{}\n", &line[2..])).collect();
        assert_eq!(grid.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("........".parse::<Board>(), Err(ParseError::RowCount(1)));
        let short = "........\n".repeat(7) + ".......\n";
        assert_eq!(short.parse::<Board>(), Err(ParseError::RowLength { row: 7, len: 7 }));
        let bad = "........\n".repeat(7) + "...Z....\n";
        assert_eq!(bad.parse::<Board>(), Err(ParseError::InvalidCell('Z')));
    }
}
