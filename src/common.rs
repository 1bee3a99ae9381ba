//! Common types for tic-tac-toe: marks, coordinates, outcomes and board errors.

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use core::fmt;
use core::str::FromStr;

/// Occupant of a cell. The human always plays `X` and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Character used when rendering the board.
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A position on the board, always within `[0, BOARD_SIZE)` on both axes.
///
/// Written as a column letter followed by a row number, so `A1` is the
/// top-left corner and `B2` the centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCoord", into = "RawCoord")
)]
pub struct Coord {
    col: u8,
    row: u8,
}

/// Wire form of [`Coord`]; decoding goes through [`Coord::new`].
#[cfg(feature = "std")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawCoord {
    col: usize,
    row: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawCoord> for Coord {
    type Error = BoardError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.col, raw.row)
    }
}

#[cfg(feature = "std")]
impl From<Coord> for RawCoord {
    fn from(coord: Coord) -> Self {
        RawCoord {
            col: coord.col(),
            row: coord.row(),
        }
    }
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Result<Self, BoardError> {
        if col >= BOARD_SIZE as usize || row >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { col, row });
        }
        Ok(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Iterate every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = BOARD_SIZE;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord { col, row }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_ch = chars.next().ok_or(BoardError::InvalidCoord)?;
        if !col_ch.is_ascii_alphabetic() {
            return Err(BoardError::InvalidCoord);
        }
        let col = (col_ch.to_ascii_uppercase() as u8 - b'A') as usize;
        let row = match chars.as_str().trim().as_bytes() {
            [digit @ b'1'..=b'9'] => (digit - b'0') as usize,
            _ => return Err(BoardError::InvalidCoord),
        };
        Coord::new(col, row - 1)
    }
}

/// Result of a concluded game. A game still in progress has no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A line was completed by this mark.
    Winner(Mark),
    /// Every cell is occupied and no line was completed.
    Draw,
}

/// Current status of a game from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    Draw,
}

impl GameStatus {
    /// End-of-game message shown to the player, `None` while in progress.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won => Some("You Win"),
            GameStatus::Lost => Some("You Lose"),
            GameStatus::Draw => Some("Draw"),
        }
    }
}

impl From<Option<Outcome>> for GameStatus {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => GameStatus::InProgress,
            Some(Outcome::Winner(Mark::X)) => GameStatus::Won,
            Some(Outcome::Winner(Mark::O)) => GameStatus::Lost,
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the board.
    OutOfBounds { col: usize, row: usize },
    /// Target cell already holds a mark.
    Occupied(Coord),
    /// The game has already concluded.
    GameOver,
    /// Text could not be parsed as a coordinate.
    InvalidCoord,
    /// Text could not be parsed as a board.
    InvalidBoard,
    /// A saved state whose outcome does not match its board.
    InvalidState,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { col, row } => {
                write!(f, "Coordinate ({}, {}) is off the board", col, row)
            }
            BoardError::Occupied(coord) => write!(f, "Square {} is already taken", coord),
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::InvalidCoord => write!(f, "Expected a square such as A1 or B2"),
            BoardError::InvalidBoard => write!(f, "Expected nine cells of X, O or ."),
            BoardError::InvalidState => write!(f, "Recorded outcome does not match the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
