use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, Print, PrintStyledContent, Stylize},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, Piece, COLS};

/// 1-based player number shown to humans
pub fn player_number(piece: Piece) -> usize {
    match piece {
        Piece::PlayerTwo => 2,
        _ => 1,
    }
}

pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for row in board.rows() {
        stdout.queue(Print("|"))?;
        for &cell in row.iter() {
            let symbol = match cell {
                Piece::Empty => ' ',
                _ => 'O',
            };
            stdout
                .queue(PrintStyledContent(
                    style(symbol)
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Piece::PlayerOne => Color::Red,
                            Piece::PlayerTwo => Color::Yellow,
                            Piece::Empty => Color::DarkBlue,
                        }),
                ))?
                .queue(Print("|"))?;
        }
        stdout.queue(Print("\n"))?;
    }

    let rule = "-".repeat(2 * COLS + 1);
    let labels: String = (1..=COLS).map(|column| format!(" {}", column)).collect();
    stdout
        .queue(Print(format!("{}\n{} \n", rule, labels)))?;
    stdout.flush()?;
    Ok(())
}
