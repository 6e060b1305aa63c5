//! The computer opponent's move policy

use log::{debug, trace};
use rand::{distr::Bernoulli, rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{Board, Piece},
    config::AiConfig,
    error::ConfigError,
    search::{Searcher, MIN_SCORE},
};

/// The first column (ascending) where the opponent of `piece` would complete
/// four in a row with its next move
pub fn find_block(board: &Board, piece: Piece) -> Option<usize> {
    let opponent = piece.opponent();
    let mut scratch = *board;

    for (column, row) in board.open_moves() {
        scratch.set(row, column, opponent);
        let wins = scratch.has_four_in_row(opponent);
        scratch.set(row, column, Piece::Empty);
        if wins {
            return Some(column);
        }
    }
    None
}

/// A computer player
///
/// Every decision is a function of the board, the configuration and the
/// random source alone; no state carries over between moves.
#[derive(Debug, Clone)]
pub struct AiPlayer<R = StdRng> {
    config: AiConfig,
    block: Bernoulli,
    rng: R,
}

impl AiPlayer<StdRng> {
    /// Creates an `AiPlayer` with a random source seeded by the OS
    pub fn new(config: AiConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an `AiPlayer` with a reproducible random source
    pub fn seeded(config: AiConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AiPlayer<R> {
    pub fn with_rng(config: AiConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let block = Bernoulli::new(config.block_probability)
            .map_err(|_| ConfigError::InvalidBlockProbability(config.block_probability))?;
        Ok(Self { config, block, rng })
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Looks for an immediate threat to block
    ///
    /// Returns the blocking column with the configured probability, and
    /// `None` when there is no threat or the draw decided to ignore it.
    pub fn block_player_win(&mut self, board: &Board, piece: Piece) -> Option<usize> {
        let column = find_block(board, piece)?;
        if self.rng.sample(self.block) {
            debug!("blocking opponent threat in column {}", column + 1);
            Some(column)
        } else {
            debug!("ignoring opponent threat in column {}", column + 1);
            None
        }
    }

    /// Picks the column with the best minimax score for `piece`
    ///
    /// Starts from a uniformly random valid column; only a strictly better
    /// score replaces the current pick, so ties go to the earlier column.
    /// Returns `None` on a full board.
    pub fn pick_best_move(&mut self, board: &Board, piece: Piece) -> Option<usize> {
        let moves = board.open_moves();
        if moves.is_empty() {
            return None;
        }
        let mut best_column = moves.column(self.rng.random_range(0..moves.len()))?;
        let mut best_score = MIN_SCORE;

        let mut searcher = Searcher::new(board, piece);
        for (column, row) in moves {
            let score = searcher.score_move(column, row, self.config.search_depth);
            trace!("column {} scored {}", column + 1, score);

            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }

        debug!(
            "picked column {} with score {} after searching {} nodes",
            best_column + 1,
            best_score,
            searcher.node_count
        );
        Some(best_column)
    }

    /// Chooses a column for `piece`: block an immediate threat (most of the
    /// time), otherwise search for the best move
    pub fn make_move(&mut self, board: &Board, piece: Piece) -> Option<usize> {
        if let Some(column) = self.block_player_win(board, piece) {
            return Some(column);
        }
        self.pick_best_move(board, piece)
    }
}

/// Chooses a column for `piece` with the default configuration and an
/// OS-seeded random source
pub fn ai_make_move(board: &Board, piece: Piece) -> Option<usize> {
    AiPlayer::new(AiConfig::default())
        .ok()?
        .make_move(board, piece)
}
