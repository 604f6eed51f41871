//! # Interactive Terminal Front-End
//!
//! A thin presentation consumer for the connect-N engine. It owns no game
//! logic: it feeds column selections into [`GameBoard::place_piece`],
//! re-reads the grid after every event, and asks
//! [`GameBoard::winner_at`] for a verdict on the landing cell.
//!
//! ## Usage
//! Run `play` for classic Connect Four, `play --variant six` for the 8×8
//! board, or override `--cols`/`--rows`/`--in-a-row` for a custom game.

use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::{ColoredString, Colorize};

use connect_n::{EvaluationDirection, GameBoard, GameVariant, PieceColor, WinningPlay};

/// Play Connect Four, Five, or Six in the terminal
#[derive(Parser, Debug)]
#[command(name = "play")]
struct Args {
    /// Which preset to play: four, five, or six
    #[arg(long, default_value = "four")]
    variant: GameVariant,

    /// Override the number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the winning run length
    #[arg(long)]
    in_a_row: Option<usize>,
}

impl Args {
    /// Builds the board from the chosen preset plus any overrides.
    fn board(&self) -> GameBoard {
        GameBoard::new(
            self.cols.unwrap_or(self.variant.cols()),
            self.rows.unwrap_or(self.variant.rows()),
            self.in_a_row.unwrap_or(self.variant.in_a_row()),
        )
    }
}

fn color_label(color: PieceColor) -> ColoredString {
    match color {
        PieceColor::Red => "Red".red(),
        PieceColor::Yellow => "Yellow".yellow(),
        PieceColor::Blank => "Blank".normal(),
    }
}

/// Prints the column ruler and every cell of the grid.
fn render(board: &GameBoard) {
    for c in 0..board.cols() {
        print!("{} ", c % 10);
    }
    println!();
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            match board.piece_at(c, r) {
                Some(PieceColor::Red) => print!("{} ", "●".red()),
                Some(PieceColor::Yellow) => print!("{} ", "●".yellow()),
                _ => print!("{} ", "·".dimmed()),
            }
        }
        println!();
    }
}

fn announce(win: &WinningPlay) {
    let axis = match win.winning_direction {
        EvaluationDirection::Vertical => "vertically",
        EvaluationDirection::Horizontal => "horizontally",
        EvaluationDirection::DiagonalUp => "on the rising diagonal",
        EvaluationDirection::DiagonalDown => "on the falling diagonal",
    };
    let cells: Vec<String> = win
        .winning_moves
        .iter()
        .map(|(c, r)| format!("({},{})", c, r))
        .collect();
    println!(
        "{} wins {} through {}",
        color_label(win.winning_color).bold(),
        axis,
        cells.join(" ")
    );
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut board = args.board();

    println!(
        "{} — enter a column number to drop a piece, 'r' to reset, 'q' to quit",
        args.variant.to_string().bold()
    );
    render(&board);

    let stdin = io::stdin();
    loop {
        print!("{}'s turn > ", color_label(board.turn()));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "r" | "reset" => {
                board.reset();
                render(&board);
            }
            _ => {
                let column = match input.parse::<i32>() {
                    Ok(c) => c,
                    Err(_) => {
                        println!("{}", "enter a column number, 'r', or 'q'".red());
                        continue;
                    }
                };
                match board.place_piece(column, 0) {
                    Ok((c, r)) => {
                        render(&board);
                        if let Some(win) = board.winner_at(c, r) {
                            announce(&win);
                            board.reset();
                            render(&board);
                        } else if board.is_full() {
                            println!("{}", "Board full with no winner — starting over".bold());
                            board.reset();
                            render(&board);
                        }
                    }
                    Err(err) => println!("{}", err.to_string().red()),
                }
            }
        }
    }

    Ok(())
}
