use tictactoe::{Board, BoardError, Coord, Mark};

fn at(col: usize, row: usize) -> Coord {
    Coord::new(col, row).unwrap()
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.cells().count(), 9);
    assert!(board.cells().all(|c| c.is_empty()));
    assert_eq!(board.empty_cells().count(), 9);
}

#[test]
fn test_cells_are_row_major_and_unique() {
    let board = Board::new();
    let coords: Vec<(usize, usize)> = board
        .cells()
        .map(|c| (c.coord.col(), c.coord.row()))
        .collect();
    let expected: Vec<(usize, usize)> = (0..3)
        .flat_map(|r| (0..3).map(move |c| (c, r)))
        .collect();
    assert_eq!(coords, expected);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    board.set(at(1, 2), Mark::O).unwrap();
    assert_eq!(board.get(at(1, 2)), Some(Mark::O));
    assert_eq!(board.get(at(2, 1)), None);
    assert_eq!(board.count(Mark::O), 1);
    assert_eq!(board.count(Mark::X), 0);
    assert_eq!(board.cell(at(1, 2)).mark, Some(Mark::O));
}

#[test]
fn test_set_overwrites_without_validation() {
    let mut board = Board::new();
    board.set(at(0, 0), Mark::X).unwrap();
    board.set(at(0, 0), Mark::O).unwrap();
    assert_eq!(board.get(at(0, 0)), Some(Mark::O));
    assert_eq!(board.occupied().count_ones(), 1);
}

#[test]
fn test_full_board() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_parse_and_display() {
    let board: Board = "X.O\n.X.\n..O".parse().unwrap();
    assert_eq!(board.get(at(0, 0)), Some(Mark::X));
    assert_eq!(board.get(at(2, 0)), Some(Mark::O));
    assert_eq!(board.get(at(1, 1)), Some(Mark::X));
    assert_eq!(board.to_string(), "X . O\n. X .\n. . O");

    let reparsed: Board = board.to_string().parse().unwrap();
    assert_eq!(reparsed, board);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!("XO".parse::<Board>(), Err(BoardError::InvalidBoard));
    assert_eq!("XOX/XOO/OXXX".parse::<Board>(), Err(BoardError::InvalidBoard));
    assert_eq!("XOZ/.../...".parse::<Board>(), Err(BoardError::InvalidBoard));
}

#[test]
fn test_coord_bounds_and_notation() {
    assert_eq!(
        Coord::new(3, 0),
        Err(BoardError::OutOfBounds { col: 3, row: 0 })
    );
    assert_eq!(at(1, 1).to_string(), "B2");
    assert_eq!("a1".parse::<Coord>().unwrap(), at(0, 0));
    assert_eq!(" C3 ".parse::<Coord>().unwrap(), at(2, 2));
    assert!("D1".parse::<Coord>().is_err());
    assert!("A0".parse::<Coord>().is_err());
    assert!("A4".parse::<Coord>().is_err());
    assert!("11".parse::<Coord>().is_err());
    assert!("".parse::<Coord>().is_err());
}

#[test]
fn test_coord_row_is_single_digit() {
    assert_eq!("A+1".parse::<Coord>(), Err(BoardError::InvalidCoord));
    assert_eq!("A01".parse::<Coord>(), Err(BoardError::InvalidCoord));
    assert_eq!("B22".parse::<Coord>(), Err(BoardError::InvalidCoord));
    assert_eq!("B 2".parse::<Coord>(), Ok(at(1, 1)));
}
