use super::*;
use crate::types::PieceKind;
use std::collections::HashSet;

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = HashSet::new();
    for color in ZOBRIST.pieces.iter() {
        for kind in color.iter() {
            for &key in kind.iter() {
                assert!(seen.insert(key), "Duplicate piece key");
            }
        }
    }
    assert!(seen.insert(ZOBRIST.black_to_move));
    for &key in ZOBRIST.castling.iter().chain(ZOBRIST.en_passant.iter()) {
        assert!(seen.insert(key), "Duplicate state key");
    }
}

#[test]
fn test_position_key_tracks_state() {
    let mut board = Board::EMPTY;
    board.set_piece(4, Some(Piece::new(Color::White, PieceKind::King)));
    board.set_piece(60, Some(Piece::new(Color::Black, PieceKind::King)));

    let base = ZOBRIST.position_key(&board, Color::White, CastlingRights::NONE, None);
    let black = ZOBRIST.position_key(&board, Color::Black, CastlingRights::NONE, None);
    let castle = ZOBRIST.position_key(&board, Color::White, CastlingRights::ALL, None);
    let ep = ZOBRIST.position_key(&board, Color::White, CastlingRights::NONE, Some(20));

    assert_ne!(base, black);
    assert_ne!(base, castle);
    assert_ne!(base, ep);
    assert_eq!(
        base,
        ZOBRIST.position_key(&board, Color::White, CastlingRights::NONE, None)
    );
}
