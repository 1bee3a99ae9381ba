use crate::{ai, board::Board, common::Coord};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Player that picks uniformly random empty squares, the same way the
/// opponent does. Drives autoplay and simulations.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        ai::random_move(board, rng)
    }
}
