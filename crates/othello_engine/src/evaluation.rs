use othello_core::{Board, Position, Side, BOARD_SIZE};

// Static weight of each square. Corners are the only squares that can never
// be flipped, so they dominate; the X- and C-squares next to them are
// penalised because occupying them tends to hand the corner over.
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10,  5,  5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [ 10,  -2,  5,  1,  1,  5,  -2,  10],
    [  5,  -2,  1,  0,  0,  1,  -2,   5],
    [  5,  -2,  1,  0,  0,  1,  -2,   5],
    [ 10,  -2,  5,  1,  1,  5,  -2,  10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10,  5,  5, 10, -20, 100],
];

const DISC_WEIGHT: i32 = 10;      // per disc of lead, endgame only
const MOBILITY_WEIGHT: i32 = 5;   // per extra legal move, before the endgame
const CORNER_BONUS: i32 = 100;    // on top of the table weight
const ENDGAME_PHASE: f64 = 0.7;   // fraction of the board filled

const CORNERS: [Position; 4] = [
    Position { row: 0, col: 0 },
    Position { row: 0, col: 7 },
    Position { row: 7, col: 0 },
    Position { row: 7, col: 7 },
];

/// Scores `board` from `side`'s point of view; higher is better for `side`.
///
/// Every term contrasts `side` with its opponent, so
/// `evaluate(b, Black) == -evaluate(b, White)` always holds.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let phase = game_phase(board);
    let mut score = positional_score(board, side);

    // At exactly ENDGAME_PHASE neither bonus applies.
    if phase > ENDGAME_PHASE {
        score += disc_differential(board, side);
    }
    if phase < ENDGAME_PHASE {
        score += mobility_differential(board, side);
    }

    score + corner_score(board, side)
}

/// Fraction of the 64 squares holding a disc.
pub fn game_phase(board: &Board) -> f64 {
    board.total_discs() as f64 / (BOARD_SIZE * BOARD_SIZE) as f64
}

fn positional_score(board: &Board, side: Side) -> i32 {
    Position::all()
        .map(|pos| match board.get(pos).side() {
            Some(owner) if owner == side => weight(pos),
            Some(_) => -weight(pos),
            None => 0,
        })
        .sum()
}

fn weight(pos: Position) -> i32 {
    POSITION_WEIGHTS[pos.row as usize][pos.col as usize]
}

fn disc_differential(board: &Board, side: Side) -> i32 {
    let own = board.disc_count(side) as i32;
    let theirs = board.disc_count(side.opponent()) as i32;
    DISC_WEIGHT * (own - theirs)
}

fn mobility_differential(board: &Board, side: Side) -> i32 {
    let own = board.legal_moves(side).len() as i32;
    let theirs = board.legal_moves(side.opponent()).len() as i32;
    MOBILITY_WEIGHT * (own - theirs)
}

fn corner_score(board: &Board, side: Side) -> i32 {
    CORNERS
        .iter()
        .map(|&pos| match board.get(pos).side() {
            Some(owner) if owner == side => CORNER_BONUS,
            Some(_) => -CORNER_BONUS,
            None => 0,
        })
        .sum()
}
