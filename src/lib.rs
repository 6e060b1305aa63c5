//! A heuristic computer opponent for the board game 'Connect 4'
//!
//! The agent scores positions by sliding a 4-cell window over every row,
//! column and diagonal, and picks its move with a depth-limited minimax
//! search with alpha-beta pruning. Before searching it looks for an
//! immediate opponent win to block, which it takes most (but not all) of
//! the time.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{ai::AiPlayer, board::{Board, Piece}, config::AiConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! board.play(3, Piece::PlayerOne)?;
//!
//! let mut ai = AiPlayer::seeded(AiConfig::default(), 7)?;
//! let column = ai.make_move(&board, Piece::PlayerTwo);
//!
//! assert!(column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod config;

pub mod board;

pub mod evaluation;

pub mod search;

pub mod ai;

pub mod game;

pub mod simulation;


pub use ai::{ai_make_move, AiPlayer};
pub use board::{Board, Piece};
pub use config::AiConfig;
pub use error::{BoardError, ConfigError, SimulationError};
pub use game::{Game, GameState};

/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The number of aligned pieces needed to win, and the length of a scoring window
pub const WINDOW_LEN: usize = 4;

// the window scan assumes a window fits in both directions
const_assert!(ROWS >= WINDOW_LEN);
const_assert!(COLS >= WINDOW_LEN);
