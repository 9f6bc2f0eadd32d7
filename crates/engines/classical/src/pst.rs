//! Piece-square tables in centipawns.
//!
//! Each table is written from White's side, indexed a1 = 0 .. h8 = 63, so the
//! first row of numbers below is rank 1. Black reads the same table at
//! `63 - sq`. The King has no table: it is left out of positional scoring.

use chess_core::{mirror, Color, Piece, PieceKind};

#[rustfmt::skip]
pub const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const KNIGHT: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
pub const BISHOP: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
pub const ROOK: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const QUEEN: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

pub fn table(kind: PieceKind) -> Option<&'static [i32; 64]> {
    match kind {
        PieceKind::Pawn => Some(&PAWN),
        PieceKind::Knight => Some(&KNIGHT),
        PieceKind::Bishop => Some(&BISHOP),
        PieceKind::Rook => Some(&ROOK),
        PieceKind::Queen => Some(&QUEEN),
        PieceKind::King => None,
    }
}

/// Bonus for `piece` standing on `sq`, from its owner's point of view.
#[inline]
pub fn bonus(piece: Piece, sq: u8) -> i32 {
    let index = match piece.color {
        Color::White => sq,
        Color::Black => mirror(sq),
    };
    table(piece.kind).map_or(0, |t| t[index as usize])
}

/// Largest absolute entry over all tables.
pub fn max_abs_bonus() -> i32 {
    [&PAWN, &KNIGHT, &BISHOP, &ROOK, &QUEEN]
        .iter()
        .flat_map(|t| t.iter())
        .map(|v| v.abs())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "pst_tests.rs"]
mod pst_tests;
