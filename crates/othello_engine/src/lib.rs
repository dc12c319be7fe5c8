pub mod evaluation;
pub mod search;
pub mod ai;

pub use evaluation::{evaluate, POSITION_WEIGHTS};
pub use search::{search_best_move, SearchConfig, SearchResult, SearchStats, Searcher, SEARCH_DEPTH};
pub use ai::{greedy_move, random_move, select_move, Difficulty, OthelloAI};
