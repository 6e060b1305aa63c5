//! Depth-limited minimax search with alpha-beta pruning

use crate::{
    board::{Board, Piece, WINDOW_COUNT},
    evaluation::{evaluate_position, FOUR_SCORE},
};

/// An upper bound on any score `evaluate_position` can return
pub const MAX_SCORE: i32 = (WINDOW_COUNT as i32) * FOUR_SCORE + 1;
/// A lower bound on any score `evaluate_position` can return
pub const MIN_SCORE: i32 = -MAX_SCORE;

/// A minimax searcher scoring positions for a fixed piece
///
/// # Notes
/// Maximizing nodes drop the searcher's own piece and minimizing nodes drop
/// the opponent's, but every leaf is scored from the searcher's point of
/// view regardless of depth.
///
/// The searcher owns a scratch copy of the board. Each child is explored by
/// placing a piece, recursing and clearing the same cell again, so the board
/// handed to [`Searcher::new`] is never touched.
#[derive(Clone, Debug)]
pub struct Searcher {
    board: Board,
    piece: Piece,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` over a copy of `board`, scoring for `piece`
    pub fn new(board: &Board, piece: Piece) -> Self {
        Self {
            board: *board,
            piece,
            node_count: 0,
        }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Performs game tree search
    ///
    /// Returns the heuristic score of the position reached after `depth`
    /// plies of best play, with `maximizing` telling whose turn it is.
    pub fn minimax(&mut self, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.node_count += 1;

        if depth == 0 || self.board.has_four_in_row(self.piece) {
            return evaluate_position(&self.board, self.piece);
        }

        let moves = self.board.open_moves();
        // full board
        if moves.is_empty() {
            return evaluate_position(&self.board, self.piece);
        }

        let mover = if maximizing {
            self.piece
        } else {
            self.piece.opponent()
        };
        let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };

        for (column, row) in moves {
            self.board.set(row, column, mover);
            let score = self.minimax(depth - 1, !maximizing, alpha, beta);
            self.board.set(row, column, Piece::Empty);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(score);
            }

            // the parent will never let play reach this node
            if beta <= alpha {
                break;
            }
        }

        best_score
    }

    /// Scores dropping the searcher's own piece at (`row`, `column`), with the
    /// opponent to reply
    pub fn score_move(&mut self, column: usize, row: usize, depth: u32) -> i32 {
        self.board.set(row, column, self.piece);
        let score = self.minimax(depth, false, MIN_SCORE, MAX_SCORE);
        self.board.set(row, column, Piece::Empty);
        score
    }
}

impl std::ops::Deref for Searcher {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

/// Scores `board` for `piece` with a fresh [`Searcher`]
pub fn minimax(board: &Board, depth: u32, maximizing: bool, piece: Piece, alpha: i32, beta: i32) -> i32 {
    Searcher::new(board, piece).minimax(depth, maximizing, alpha, beta)
}
