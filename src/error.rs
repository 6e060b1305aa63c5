//! Errors raised by the board and the AI configuration

/// A move that cannot be applied to the board.
///
/// The column variants mean the caller broke its contract: columns must come
/// from [`Board::valid_columns`](crate::board::Board::valid_columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {} is full", .column + 1)]
    ColumnFull { column: usize },

    #[error("column {} out of range, columns must be between 1 and {}", .column + 1, crate::COLS)]
    InvalidColumn { column: usize },

    #[error("could not parse '{0}' as a valid move")]
    Unparsable(char),

    #[error("the game is already over")]
    GameOver,
}

/// An AI configuration that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("block probability must be within [0, 1], got {0}")]
    InvalidBlockProbability(f64),
}

/// Errors that can stop a batch of self-play games
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid AI configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("illegal move during self-play: {0}")]
    Board(#[from] BoardError),
}
