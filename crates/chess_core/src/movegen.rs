//! Legal move generation.
//!
//! Enumeration order is fixed and part of the engine's observable behavior:
//! origin squares a1..h8, and for each origin the target squares in
//! ascending order. Promotions come as queen, rook, bishop, knight; castling
//! moves follow the king's ordinary steps.

use crate::attacks::{DIAGONALS, ORTHOGONALS, king_attacks, knight_attacks, pawn_attacks, ray};
use crate::bitboard::Bitboard;
use crate::board::CASTLES;
use crate::position::Position;
use crate::types::*;

/// Generate all legal moves into a fresh vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);
    out.retain(|&mv| is_legal(pos, mv));
}

/// True when the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(pos, &mut pseudo);
    pseudo.into_iter().any(|mv| is_legal(pos, mv))
}

/// A pseudo-legal move is legal when it does not leave the mover's king
/// attacked. Checked on a scratch copy of the placement.
fn is_legal(pos: &Position, mv: Move) -> bool {
    let mover = pos.side_to_move;
    let mut scratch = pos.board;
    scratch.relocate(mv);
    !scratch.in_check(mover)
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let own = pos.board.occupied_by(us);

    for (from, pc) in pos.board.pieces() {
        if pc.color != us {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, us, out),
            PieceKind::Knight => push_targets(from, knight_attacks(from) & !own, out),
            PieceKind::Bishop => gen_slider(pos, from, &DIAGONALS, &[], out),
            PieceKind::Rook => gen_slider(pos, from, &ORTHOGONALS, &[], out),
            PieceKind::Queen => gen_slider(pos, from, &DIAGONALS, &ORTHOGONALS, out),
            PieceKind::King => {
                push_targets(from, king_attacks(from) & !own, out);
                gen_castle(pos, from, us, out);
            }
        }
    }
}

fn push_targets(from: u8, targets: Bitboard, out: &mut Vec<Move>) {
    out.extend(targets.map(|to| Move::new(from, to)));
}

fn push_pawn_move(from: u8, to: u8, out: &mut Vec<Move>) {
    if Bitboard::from_square(to).0 & (Bitboard::RANK_1.0 | Bitboard::RANK_8.0) != 0 {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::promotion(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, us: Color, out: &mut Vec<Move>) {
    let (dir, start_rank) = match us {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };
    let (f, r) = (file_of(from), rank_of(from));

    let mut targets = Vec::with_capacity(4);

    for to in pawn_attacks(from, us) {
        match pos.board.piece_at(to) {
            Some(victim) if victim.color != us => targets.push((to, false)),
            None if pos.en_passant == Some(to) => targets.push((to, true)),
            _ => {}
        }
    }

    if let Some(one) = sq(f, r + dir)
        && pos.board.piece_at(one).is_none()
    {
        targets.push((one, false));
        if r == start_rank
            && let Some(two) = sq(f, r + 2 * dir)
            && pos.board.piece_at(two).is_none()
        {
            targets.push((two, false));
        }
    }

    targets.sort_unstable_by_key(|&(to, _)| to);
    for (to, en_passant) in targets {
        if en_passant {
            out.push(Move {
                is_en_passant: true,
                ..Move::new(from, to)
            });
        } else {
            push_pawn_move(from, to, out);
        }
    }
}

fn gen_slider(
    pos: &Position,
    from: u8,
    dirs: &[(i8, i8)],
    more_dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let us = pos.side_to_move;
    let mut targets = Bitboard::EMPTY;
    for &dir in dirs.iter().chain(more_dirs) {
        for to in ray(from, dir) {
            match pos.board.piece_at(to) {
                None => targets.set(to),
                Some(pc) => {
                    if pc.color != us {
                        targets.set(to);
                    }
                    break;
                }
            }
        }
    }
    push_targets(from, targets, out);
}

fn gen_castle(pos: &Position, from: u8, us: Color, out: &mut Vec<Move>) {
    let them = us.other();
    for castle in CASTLES.iter().filter(|c| c.color == us) {
        if from != castle.king_from || !pos.castling.has(castle.right) {
            continue;
        }
        if pos.board.piece_at(castle.rook_from) != Some(Piece::new(us, PieceKind::Rook)) {
            continue;
        }
        if castle
            .between
            .iter()
            .any(|&s| pos.board.piece_at(s).is_some())
        {
            continue;
        }
        // Can't castle out of or through check.
        if pos.board.is_square_attacked(from, them)
            || castle
                .king_path
                .iter()
                .any(|&s| pos.board.is_square_attacked(s, them))
        {
            continue;
        }
        out.push(Move {
            is_castle: true,
            ..Move::new(castle.king_from, castle.king_to)
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
