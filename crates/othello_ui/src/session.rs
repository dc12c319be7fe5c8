use log::info;
use othello_core::{Board, Move, MoveError, ParseError, Position, Side};
use othello_engine::{evaluate, OthelloAI};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("the game is over")]
    GameOver,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("{0} has no legal move")]
    NoLegalMove(Side),
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub side: Side,
    pub mv: Move,
    /// Set when the next side had no legal reply and the turn came straight back.
    pub passed: Option<Side>,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub black: usize,
    pub white: usize,
    pub winner: Option<Side>,
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    to_move: Side,
}

/// Turn-taking around the rules engine: who moves next, forced passes,
/// undo through retained boards and end-of-game scoring.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Side,
    history: Vec<Snapshot>,
    last_move: Option<(Side, Position)>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_position(Board::new(), Side::Black)
    }

    /// Starts from an arbitrary position. If `to_move` has no move but the
    /// opponent does, the opponent starts.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        let to_move = if !board.has_legal_move(to_move) && board.has_legal_move(to_move.opponent()) {
            to_move.opponent()
        } else {
            to_move
        };
        Self {
            board,
            to_move,
            history: Vec::new(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn last_move(&self) -> Option<(Side, Position)> {
        self.last_move
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// (black, white) disc counts.
    pub fn score(&self) -> (usize, usize) {
        (self.board.disc_count(Side::Black), self.board.disc_count(Side::White))
    }

    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let (black, white) = self.score();
        Some(GameResult {
            black,
            white,
            winner: self.board.winner(),
        })
    }

    /// Plays `pos` for the side to move.
    pub fn play(&mut self, pos: Position) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let side = self.to_move;
        let next = self.board.play(pos, side)?;
        // The mover gains the placed disc plus every flipped one
        let flip_count = next.disc_count(side) - self.board.disc_count(side) - 1;

        self.history.push(Snapshot {
            board: self.board,
            to_move: side,
        });
        self.board = next;
        self.last_move = Some((side, pos));

        let passed = self.advance_turn();
        let game_over = self.is_over();
        if game_over {
            let (black, white) = self.score();
            info!("game over: Black {} - White {}", black, white);
        }

        Ok(TurnOutcome {
            side,
            mv: Move::new(pos, flip_count),
            passed,
            game_over,
        })
    }

    /// Parses a square such as `d3` and plays it.
    pub fn play_str(&mut self, notation: &str) -> Result<TurnOutcome, SessionError> {
        let pos: Position = notation.parse()?;
        self.play(pos)
    }

    /// Lets `ai` choose and play for the side to move.
    pub fn play_ai(&mut self, ai: &mut OthelloAI) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        let side = self.to_move;
        match ai.get_move(&self.board, side) {
            Some(mv) => self.play(mv.position),
            None => {
                // advance_turn never leaves a blocked side to move on a live board
                debug_assert!(false, "{} to move without a legal move", side);
                Err(SessionError::NoLegalMove(side))
            }
        }
    }

    // Hands the turn over, skipping a side that cannot move. Returns the side
    // that passed, if any.
    fn advance_turn(&mut self) -> Option<Side> {
        let next = self.to_move.opponent();
        if self.board.has_legal_move(next) || self.board.is_terminal() {
            self.to_move = next;
            return None;
        }
        info!("{} has no legal move and passes", next);
        Some(next)
    }

    /// Restores the position before the last move.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let snapshot = self.history.pop().ok_or(SessionError::NothingToUndo)?;
        self.board = snapshot.board;
        self.to_move = snapshot.to_move;
        self.last_move = None;
        Ok(())
    }

    /// Undoes moves until it is `side`'s turn again, e.g. to take back a
    /// human move together with the computer's reply.
    pub fn undo_to(&mut self, side: Side) -> Result<(), SessionError> {
        if !self.history.iter().any(|s| s.to_move == side) {
            return Err(SessionError::NothingToUndo);
        }
        self.undo()?;
        while self.to_move != side {
            self.undo()?;
        }
        Ok(())
    }

    /// Legal moves for the side to move, best first by the evaluation of the
    /// position each one leads to. Equal scores keep row-major order.
    pub fn hints(&self) -> Vec<(Move, i32)> {
        let side = self.to_move;
        let mut ranked: Vec<(Move, i32)> = self
            .legal_moves()
            .into_iter()
            .filter_map(|mv| {
                let child = self.board.apply_move(mv, side).ok()?;
                Some((mv, evaluate(&child, side)))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
