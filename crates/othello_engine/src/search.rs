use log::debug;
use othello_core::{Board, Move, Side};

use crate::evaluation::evaluate;

// Search parameters
pub const SEARCH_DEPTH: u8 = 4;   // Plies searched by the hardest tier, root move included
const ALPHA_INIT: i32 = i32::MIN; // Stand-ins for -inf / +inf; scores are never negated
const BETA_INIT: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Total plies, counting the root move. Values below 1 are treated as 1.
    pub depth: u8,
    /// Disable to run a plain full-width minimax.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,    // positions visited below the root
    pub cutoffs: u64,  // sibling lists abandoned because beta <= alpha
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub stats: SearchStats,
}

/// Depth-limited minimax with optional alpha-beta pruning.
///
/// Children are explored in the row-major order produced by
/// `Board::legal_moves`, and every leaf is scored for the side that owns the
/// root, so max nodes belong to that side and min nodes to its opponent.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Picks the best move for `side`, or `None` when `side` has to pass.
    ///
    /// Ties keep the earliest move in row-major order.
    pub fn best_move(&mut self, board: &Board, side: Side) -> Option<SearchResult> {
        self.stats = SearchStats::default();
        let depth = self.config.depth.max(1);

        let mut alpha = ALPHA_INIT;
        let mut best: Option<(Move, i32)> = None;

        for mv in board.legal_moves(side) {
            let Ok(child) = board.apply_move(mv, side) else {
                continue;
            };
            let score = self.search(&child, depth - 1, false, alpha, BETA_INIT, side);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if self.config.pruning {
                alpha = alpha.max(score);
            }
        }

        let (best_move, score) = best?;
        debug!(
            "{} searched to depth {}: best {} scoring {} ({} nodes, {} cutoffs)",
            side, depth, best_move, score, self.stats.nodes, self.stats.cutoffs
        );

        Some(SearchResult {
            best_move,
            score,
            stats: self.stats,
        })
    }

    /// Minimax value of `board` for `root_side` searched `depth` plies deep.
    ///
    /// `maximizing` says whether `root_side` is the one to move here. A side
    /// with no legal move passes, which costs a ply; if its opponent cannot
    /// move either the position is scored as it stands.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        root_side: Side,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return evaluate(board, root_side);
        }

        let to_move = if maximizing { root_side } else { root_side.opponent() };
        let moves = board.legal_moves(to_move);

        if moves.is_empty() {
            if !board.has_legal_move(to_move.opponent()) {
                return evaluate(board, root_side);
            }
            return self.search(board, depth - 1, !maximizing, alpha, beta, root_side);
        }

        let mut best = if maximizing { ALPHA_INIT } else { BETA_INIT };

        for mv in moves {
            let Ok(child) = board.apply_move(mv, to_move) else {
                continue;
            };
            let score = self.search(&child, depth - 1, !maximizing, alpha, beta, root_side);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Best move for `side` at the standard depth, with pruning.
pub fn search_best_move(board: &Board, side: Side) -> Option<Move> {
    Searcher::default()
        .best_move(board, side)
        .map(|result| result.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::{Cell, Position};

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::empty()
            .with_cell(Position::new(0, 0), Cell::Black)
            .with_cell(Position::new(0, 1), Cell::White);
        assert!(search_best_move(&board, Side::White).is_none());
        assert_eq!(
            search_best_move(&board, Side::Black),
            Some(Move::new(Position::new(0, 2), 1))
        );
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let board = Board::new();
        let mut searcher = Searcher::default();
        for side in [Side::Black, Side::White] {
            assert_eq!(
                searcher.search(&board, 0, true, ALPHA_INIT, BETA_INIT, side),
                evaluate(&board, side)
            );
        }
    }

    #[test]
    fn test_terminal_position_is_evaluated_in_place() {
        let board = Board::empty()
            .with_cell(Position::new(0, 0), Cell::Black)
            .with_cell(Position::new(7, 7), Cell::White);
        let mut searcher = Searcher::default();
        let score = searcher.search(&board, 3, true, ALPHA_INIT, BETA_INIT, Side::Black);
        assert_eq!(score, evaluate(&board, Side::Black));
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_forced_pass_consumes_a_ply() {
        // White cannot move, Black can: the pass at depth 1 hands over to a
        // depth-0 leaf without playing anything.
        let board = Board::empty()
            .with_cell(Position::new(0, 0), Cell::Black)
            .with_cell(Position::new(0, 1), Cell::White);
        let mut searcher = Searcher::default();
        let score = searcher.search(&board, 1, false, ALPHA_INIT, BETA_INIT, Side::Black);
        assert_eq!(score, evaluate(&board, Side::Black));
        assert_eq!(searcher.stats().nodes, 2);
    }

    #[test]
    fn test_depth_one_matches_greedy_scores() {
        let board = Board::new().play(Position::new(2, 3), Side::Black).unwrap();
        let mut searcher = Searcher::new(SearchConfig { depth: 1, pruning: true });
        let result = searcher.best_move(&board, Side::White).unwrap();

        let best_static = board
            .legal_moves(Side::White)
            .into_iter()
            .map(|mv| evaluate(&board.apply_move(mv, Side::White).unwrap(), Side::White))
            .max()
            .unwrap();
        assert_eq!(result.score, best_static);
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let board = Board::new();
        let mut searcher = Searcher::default();
        let _ = searcher.best_move(&board, Side::Black);
        assert_eq!(board, Board::new());
    }
}
