use crate::{
    board::{Board, Piece},
    error::BoardError,
    COLS, ROWS,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won(Piece),
    Draw,
}

/// A game in progress: the live board plus whose turn it is
///
/// `PlayerOne` moves on even turns and `PlayerTwo` on odd turns.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: usize,
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_piece(&self) -> Piece {
        if self.turn % 2 == 0 {
            Piece::PlayerOne
        } else {
            Piece::PlayerTwo
        }
    }

    /// Drops the current player's piece into `column` and advances the turn
    pub fn play(&mut self, column: usize) -> Result<GameState, BoardError> {
        if self.state != GameState::Playing {
            return Err(BoardError::GameOver);
        }

        let piece = self.current_piece();
        self.board.play(column, piece)?;

        self.state = if self.board.has_four_in_row(piece) {
            GameState::Won(piece)
        } else if self.turn == ROWS * COLS - 1 {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.turn += 1;

        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
