//! Game board state, stored as one `BitBoard` per mark.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord, Mark};
use crate::config::BOARD_SIZE;
use core::fmt;
use core::str::FromStr;

pub type BB = BitBoard<u16, { BOARD_SIZE as usize }>;

/// A single board position together with its occupant, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub mark: Option<Mark>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }
}

/// The 3×3 grid. Exactly one cell exists per coordinate, and a cell is never
/// present in both mark layers at once.
///
/// The board does not enforce the rules: `set` overwrites whatever is there.
/// Checking that a move targets an empty square is the caller's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardLayers", into = "BoardLayers")
)]
pub struct Board {
    x: BB,
    o: BB,
}

/// Wire form of [`Board`]. Both layers must stay on the board and may not
/// share a cell.
#[cfg(feature = "std")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardLayers {
    x: BB,
    o: BB,
}

#[cfg(feature = "std")]
impl TryFrom<BoardLayers> for Board {
    type Error = BoardError;

    fn try_from(layers: BoardLayers) -> Result<Self, Self::Error> {
        let BoardLayers { x, o } = layers;
        if !BB::full().contains(x) || !BB::full().contains(o) || !(x & o).is_empty() {
            return Err(BoardError::InvalidBoard);
        }
        Ok(Board { x, o })
    }
}

#[cfg(feature = "std")]
impl From<Board> for BoardLayers {
    fn from(board: Board) -> Self {
        BoardLayers {
            x: board.x,
            o: board.o,
        }
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        let (c, r) = (coord.col(), coord.row());
        if self.x.get(c, r).unwrap_or(false) {
            Some(Mark::X)
        } else if self.o.get(c, r).unwrap_or(false) {
            Some(Mark::O)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        Cell {
            coord,
            mark: self.get(coord),
        }
    }

    /// Place `mark` at `coord`, replacing any previous occupant.
    pub fn set(&mut self, coord: Coord, mark: Mark) -> Result<(), BoardError> {
        let (c, r) = (coord.col(), coord.row());
        match mark {
            Mark::X => {
                self.o.clear(c, r)?;
                self.x.set(c, r)?;
            }
            Mark::O => {
                self.x.clear(c, r)?;
                self.o.set(c, r)?;
            }
        }
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Coord::all().map(move |coord| self.cell(coord))
    }

    /// Coordinates of unoccupied cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&coord| self.get(coord).is_none())
    }

    /// Occupancy mask of both marks.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Occupancy mask of a single mark.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marks(mark).count_ones()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells().enumerate() {
            let ch = cell.mark.map_or('.', Mark::symbol);
            write!(f, "{}", ch)?;
            let last_in_row = (i + 1) % BOARD_SIZE as usize == 0;
            if last_in_row && i + 1 < crate::config::CELL_COUNT {
                writeln!(f)?;
            } else if !last_in_row {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

/// Parse nine cells written row-major as `X`, `O` or `.`, e.g. `"XO./.X./..O"`.
/// Whitespace and `/` separators are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut cells = s.chars().filter(|c| !c.is_whitespace() && *c != '/');
        for coord in Coord::all() {
            let mark = match cells.next() {
                Some('X' | 'x') => Some(Mark::X),
                Some('O' | 'o') => Some(Mark::O),
                Some('.' | '-') => None,
                _ => return Err(BoardError::InvalidBoard),
            };
            if let Some(mark) = mark {
                board.set(coord, mark)?;
            }
        }
        if cells.next().is_some() {
            return Err(BoardError::InvalidBoard);
        }
        Ok(board)
    }
}
