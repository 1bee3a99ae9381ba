pub const BOARD_SIZE: u8 = 3;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Every line that wins the game, as `(col, row)` triples. Evaluation order
/// is fixed: rows top to bottom, columns left to right, main diagonal, then
/// the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Upper bound on rejection-sampling draws before the opponent falls back to
/// choosing from the explicit list of empty cells.
pub const MAX_SAMPLES: usize = 64;
