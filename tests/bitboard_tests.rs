use tictactoe::{BitBoard, BitBoardError};

type BB = BitBoard<u16, 3>;

#[test]
fn test_get_set_clear() {
    let mut bb = BB::new();
    assert!(bb.is_empty());

    bb.set(2, 0).unwrap();
    assert!(bb.get(2, 0).unwrap());
    assert!(!bb.get(0, 2).unwrap());

    bb.clear(2, 0).unwrap();
    assert!(!bb.get(2, 0).unwrap());
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BB::new();
    assert_eq!(
        bb.set(3, 0),
        Err(BitBoardError::IndexOutOfBounds { col: 3, row: 0 })
    );
    assert!(bb.get(0, 3).is_err());
    assert!(BB::from_iter([(0, 0), (1, 3)]).is_err());
}

#[test]
fn test_full_masks_upper_bits() {
    let full = BB::full();
    assert!(full.is_full());
    assert_eq!(full.count_ones(), 9);

    // bits past the ninth cell are not part of the board
    let raw = BB::from_raw(u16::MAX);
    assert_eq!(raw, full);
}

#[test]
fn test_contains_line() {
    let row = BB::from_iter([(0, 1), (1, 1), (2, 1)]).unwrap();
    let board = row | BB::from_iter([(0, 0)]).unwrap();
    assert!(board.contains(row));
    assert!(!row.contains(board));
    assert_eq!((board & row).count_ones(), 3);
    assert!(BB::full().contains(board));
}
