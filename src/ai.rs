// Random opponent: picks a uniformly random empty square.
// Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{BoardError, Coord, Mark},
    config::{BOARD_SIZE, MAX_SAMPLES},
};
use log::{debug, trace};
use rand::Rng;

/// Choose a uniformly random empty square on `board`, or `None` if it is full.
///
/// Coordinates are drawn independently per axis and rejected while they land
/// on occupied squares. After [`MAX_SAMPLES`] rejections the choice is made
/// directly from the list of empty squares instead, so the call terminates on
/// every board. Both paths are uniform over the empty squares.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let empty = board.empty_cells().count();
    if empty == 0 {
        return None;
    }
    for attempt in 0..MAX_SAMPLES {
        let col = rng.random_range(0..BOARD_SIZE as usize);
        let row = rng.random_range(0..BOARD_SIZE as usize);
        let coord = Coord::new(col, row).ok()?;
        if board.get(coord).is_none() {
            trace!("sampled {} after {} rejections", coord, attempt);
            return Some(coord);
        }
    }
    debug!("rejection sampling exhausted, picking from {} empty squares", empty);
    pick_empty(board, rng)
}

/// Choose uniformly from the explicit list of empty squares.
pub fn pick_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let empty = board.empty_cells().count();
    if empty == 0 {
        return None;
    }
    let pick = rng.random_range(0..empty);
    board.empty_cells().nth(pick)
}

/// Place `mark` on a random empty square of `board`.
///
/// Returns the square that was taken, or `None` when the board had no empty
/// square left.
pub fn play_random_move<R: Rng + ?Sized>(
    board: &mut Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Option<Coord>, BoardError> {
    let Some(coord) = random_move(board, rng) else {
        return Ok(None);
    };
    board.set(coord, mark)?;
    Ok(Some(coord))
}
