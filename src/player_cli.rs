#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Coord, GameStatus, Mark},
    config::BOARD_SIZE,
    outcome,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Interactive player reading squares such as `B2` from a line-based input.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Player reading from standard input.
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Player reading from any buffered source, e.g. a scripted session.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Read one trimmed line, or `None` once the input is exhausted.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_owned()),
        }
    }

    /// Ask whether to start another game. Anything but `y`/`yes` declines.
    pub fn prompt_play_again(&mut self) -> bool {
        std::print!("Play again? [y/N]: ");
        let _ = io::stdout().flush();
        match self.read_line() {
            Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `board` with column letters and row numbers.
pub fn format_board(board: &Board) -> String {
    let n = BOARD_SIZE as usize;
    let highlight = outcome::winning_line(board).map(|(_, line)| line);
    let mut out = String::from("  ");
    for c in 0..n {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    for cell in board.cells() {
        let coord = cell.coord;
        if coord.col() == 0 {
            out.push_str(&std::format!("\n{:2}", coord.row() + 1));
        }
        let won = highlight.is_some_and(|line| line.contains(&coord));
        let ch = match cell.mark {
            Some(mark) if won => mark.symbol().to_ascii_lowercase(),
            Some(mark) => mark.symbol(),
            None => '.',
        };
        out.push(' ');
        out.push(ch);
    }
    out
}

pub fn print_board(board: &Board) {
    std::println!("{}", format_board(board));
}

impl Player for CliPlayer {
    fn select_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        loop {
            std::print!("Your move ({} plays first): ", Mark::X);
            let _ = io::stdout().flush();
            let line = self.read_line()?;
            match line.parse::<Coord>() {
                Ok(coord) if board.get(coord).is_some() => {
                    std::println!("{} is already taken", coord);
                }
                Ok(coord) => return Some(coord),
                Err(e) => std::println!("{}", e),
            }
        }
    }

    fn handle_reply(&mut self, coord: Coord) {
        std::println!("Opponent played {}", coord);
    }

    fn handle_game_over(&mut self, status: GameStatus, board: &Board) {
        std::println!();
        print_board(board);
        if let Some(message) = status.message() {
            std::println!("\n*** {} ***", message);
        }
    }
}
