use anyhow::Result;
use clap::{Parser, Subcommand};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    config::{DEFAULT_BLOCK_PROBABILITY, DEFAULT_SEARCH_DEPTH},
    simulation::simulate,
    *,
};

mod display;
use display::*;

#[derive(Parser, Debug)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax computer opponent")]
struct Cli {
    /// Search depth of the computer opponent, in plies
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u32,

    /// Probability of blocking an immediate opponent win
    #[arg(long, default_value_t = DEFAULT_BLOCK_PROBABILITY)]
    block_probability: f64,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Play interactively (the default)
    Play,
    /// Let the computer play against itself and report the results
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    SinglePlayer,
    Multiplayer,
}

// None on end of input
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

fn read_column(board: &Board, piece: Piece) -> Result<Option<usize>> {
    loop {
        let message = format!(
            "Player {}, choose a column (1-{}): ",
            player_number(piece),
            COLS
        );
        let input = match prompt(&message)? {
            Some(input) => input,
            None => return Ok(None),
        };

        match input.parse::<usize>() {
            Err(_) => println!("Invalid input, please enter a number."),
            Ok(column @ 1..=COLS) if board.playable(column - 1) => return Ok(Some(column - 1)),
            Ok(_) => println!("Invalid input, please choose a column that is not full."),
        }
    }
}

fn play_game(mode: Mode, ai: &mut AiPlayer) -> Result<()> {
    let mut game = Game::new();
    draw(game.board())?;

    loop {
        let piece = game.current_piece();
        let computer_turn = mode == Mode::SinglePlayer && piece == Piece::PlayerTwo;

        let column = if computer_turn {
            match ai.make_move(game.board(), piece) {
                Some(column) => {
                    println!("Computer chose column {}", column + 1);
                    column
                }
                None => break,
            }
        } else {
            match read_column(game.board(), piece)? {
                Some(column) => column,
                None => return Ok(()),
            }
        };

        let state = game.play(column)?;
        draw(game.board())?;

        match state {
            GameState::Playing => {}
            GameState::Won(winner) => {
                if computer_turn {
                    println!("Computer wins!");
                } else {
                    println!("Player {} wins!", player_number(winner));
                }
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

fn main_menu(mut ai: AiPlayer) -> Result<()> {
    loop {
        println!("\nMain menu:");
        println!("1. Single player (against the computer)");
        println!("2. Multiplayer (2 players)");
        println!("3. Quit");

        let choice = match prompt("Choose a mode (1, 2 or 3): ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        match choice.as_str() {
            "1" => play_game(Mode::SinglePlayer, &mut ai)?,
            "2" => play_game(Mode::Multiplayer, &mut ai)?,
            "3" => {
                println!("Goodbye.");
                return Ok(());
            }
            _ => println!("Invalid input, please choose 1, 2 or 3."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AiConfig::new(cli.depth, cli.block_probability)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let ai = match cli.seed {
                Some(seed) => AiPlayer::seeded(config, seed)?,
                None => AiPlayer::new(config)?,
            };
            main_menu(ai)
        }
        Command::Simulate { games } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Simulating {} games with seed {}", games, seed);

            let report = simulate(games, config, seed, true)?;
            println!(
                "Player 1 wins: {}, Player 2 wins: {}, Draws: {}",
                report.player_one_wins, report.player_two_wins, report.draws
            );
            println!("Mean game length: {:.1} moves", report.average_length());
            Ok(())
        }
    }
}
