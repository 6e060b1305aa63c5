//! Static heuristic scoring of board positions

use crate::board::{Board, Piece, Window};

/// Score of a window completely filled by the scoring piece
pub const FOUR_SCORE: i32 = 100;
/// Score of three scoring pieces and one empty cell
pub const THREE_SCORE: i32 = 5;
/// Score of two scoring pieces and two empty cells
pub const TWO_SCORE: i32 = 2;
/// Penalty for three opponent pieces and one empty cell
pub const OPPONENT_THREE_PENALTY: i32 = 4;

/// Scores a single window for `piece`
///
/// The bonus for `piece` and the penalty for an open opponent three are
/// checked independently, though a single window can never trigger both.
pub fn evaluate_window(window: &Window, piece: Piece, opponent: Piece) -> i32 {
    let count = |target: Piece| window.iter().filter(|&&cell| cell == target).count();
    let own = count(piece);
    let opp = count(opponent);
    let empty = count(Piece::Empty);

    let mut score = if own == 4 {
        FOUR_SCORE
    } else if own == 3 && empty == 1 {
        THREE_SCORE
    } else if own == 2 && empty == 2 {
        TWO_SCORE
    } else {
        0
    };

    if opp == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }
    score
}

/// The heuristic value of `board` from `piece`'s point of view, summed over
/// every window of every orientation. Higher is better for `piece`.
pub fn evaluate_position(board: &Board, piece: Piece) -> i32 {
    let opponent = piece.opponent();
    board
        .windows()
        .map(|window| evaluate_window(&window, piece, opponent))
        .sum()
}
