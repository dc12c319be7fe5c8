use log::debug;
use othello_core::{Board, Move, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::evaluation::evaluate;
use crate::search::{SearchConfig, Searcher};

/// The three playing strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Random,
    /// Best static evaluation one ply ahead.
    #[default]
    Greedy,
    /// Alpha-beta minimax, four plies deep.
    Minimax,
}

impl Difficulty {
    /// Maps levels 1, 2 and 3 to the tiers. Anything else plays greedily.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Random,
            2 => Difficulty::Greedy,
            3 => Difficulty::Minimax,
            other => {
                debug!("unknown difficulty level {}, using greedy", other);
                Difficulty::Greedy
            }
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Greedy => 2,
            Difficulty::Minimax => 3,
        }
    }
}

impl From<u8> for Difficulty {
    fn from(level: u8) -> Self {
        Difficulty::from_level(level)
    }
}

/// Chooses a move for `side`, or `None` when `side` must pass.
///
/// `rng` is only drawn from by the random tier.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    match difficulty {
        Difficulty::Random => random_move(board, side, rng),
        Difficulty::Greedy => greedy_move(board, side),
        Difficulty::Minimax => Searcher::new(SearchConfig::default())
            .best_move(board, side)
            .map(|result| result.best_move),
    }
}

pub fn random_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}

/// The move whose resulting position evaluates best for `side`; the first
/// one wins a tie.
pub fn greedy_move(board: &Board, side: Side) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;

    for mv in board.legal_moves(side) {
        let Ok(child) = board.apply_move(mv, side) else {
            continue;
        };
        let score = evaluate(&child, side);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best.map(|(mv, _)| mv)
}

/// A computer opponent holding its difficulty and its own random source.
#[derive(Debug, Clone)]
pub struct OthelloAI {
    difficulty: Difficulty,
    rng: StdRng,
}

impl OthelloAI {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible opponent: the same seed replays the same random choices.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        let mv = select_move(board, side, self.difficulty, &mut self.rng);
        debug!("{:?} AI ({}) chose {:?}", self.difficulty, side, mv);
        mv
    }
}

impl Default for OthelloAI {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
