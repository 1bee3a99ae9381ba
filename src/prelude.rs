//! Commonly used types and utilities for ease of import.

pub use crate::{
    evaluate, random_move, Board, Coord, GameEngine, GameState, GameStatus, Mark, Outcome,
    Player, RandomPlayer,
};

#[cfg(feature = "std")]
pub use crate::{print_board, CliPlayer};
