use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::RANK_1.popcount(), 8);
    assert_eq!(Bitboard::DARK_SQUARES.popcount(), 32);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}

#[test]
fn test_iterator_is_ascending() {
    let bb = Bitboard(0b1010) | Bitboard::from_square(40);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3, 40]);
}

#[test]
fn test_dark_squares() {
    assert!(Bitboard::DARK_SQUARES.contains(0)); // a1
    assert!(!Bitboard::DARK_SQUARES.contains(7)); // h1
    assert!(Bitboard::DARK_SQUARES.contains(63)); // h8
    assert!(!Bitboard::DARK_SQUARES.contains(56)); // a8
}
