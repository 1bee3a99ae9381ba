//! Win and draw detection.

use crate::board::{Board, BB};
use crate::common::{Coord, Mark, Outcome};
use crate::config::LINES;

/// Determine whether `board` is won, drawn or still in progress (`None`).
///
/// Lines are checked in the fixed order of [`LINES`] and the first complete
/// line decides the winner. Only when no line is complete does a full board
/// count as a draw.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((mark, _)) = winning_line(board) {
        return Some(Outcome::Winner(mark));
    }
    if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// The first completed line and the mark that owns it.
pub fn winning_line(board: &Board) -> Option<(Mark, [Coord; 3])> {
    for line in LINES.iter() {
        let mask = BB::from_iter(line.iter().copied()).ok()?;
        let owner = [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| board.marks(mark).contains(mask));
        if let Some(mark) = owner {
            let mut coords = [Coord::default(); 3];
            for (slot, &(c, r)) in coords.iter_mut().zip(line.iter()) {
                *slot = Coord::new(c, r).ok()?;
            }
            return Some((mark, coords));
        }
    }
    None
}
