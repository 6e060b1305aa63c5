//! Batches of AI-vs-AI games for gauging a configuration

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::{
    ai::AiPlayer,
    board::Piece,
    config::AiConfig,
    error::SimulationError,
    game::{Game, GameState},
};

/// The outcome of one self-play game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub state: GameState,
    pub turns: usize,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub total_turns: usize,
}

impl SimulationReport {
    fn record(mut self, record: &GameRecord) -> Self {
        self.games += 1;
        self.total_turns += record.turns;
        match record.state {
            GameState::Won(Piece::PlayerOne) => self.player_one_wins += 1,
            GameState::Won(Piece::PlayerTwo) => self.player_two_wins += 1,
            _ => self.draws += 1,
        }
        self
    }

    /// Mean number of pieces placed per game
    pub fn average_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}

/// Plays a single game between two AI players seeded with `seed` and `seed + 1`
pub fn play_game(config: AiConfig, seed: u64) -> Result<GameRecord, SimulationError> {
    let mut players = [
        AiPlayer::seeded(config, seed)?,
        AiPlayer::seeded(config, seed.wrapping_add(1))?,
    ];
    let mut game = Game::new();

    while game.state() == GameState::Playing {
        let piece = game.current_piece();
        let player = &mut players[game.turn() % 2];
        let Some(column) = player.make_move(game.board(), piece) else {
            break;
        };
        game.play(column)?;
    }

    Ok(GameRecord {
        state: game.state(),
        turns: game.turn(),
    })
}

/// Plays `games` independent AI-vs-AI games in parallel
///
/// Game `i` is seeded from `seed + 2i`, so a batch is reproducible regardless
/// of how the games are scheduled across threads.
pub fn simulate(
    games: usize,
    config: AiConfig,
    seed: u64,
    show_progress: bool,
) -> Result<SimulationReport, SimulationError> {
    config.validate()?;

    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::with_template("Simulating games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  "),
    );

    info!(
        "simulating {} games at depth {} (block probability {})",
        games, config.search_depth, config.block_probability
    );

    let records = (0..games)
        .into_par_iter()
        .map(|i| {
            let record = play_game(config, seed.wrapping_add(2 * i as u64));
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;
    progress.finish();

    let report = records
        .iter()
        .fold(SimulationReport::default(), SimulationReport::record);
    info!(
        "simulation complete: {} player one wins, {} player two wins, {} draws",
        report.player_one_wins, report.player_two_wins, report.draws
    );
    Ok(report)
}
