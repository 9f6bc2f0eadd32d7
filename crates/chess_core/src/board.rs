//! Piece placement (mailbox) and the geometric queries built on it.

use crate::attacks::{DIAGONALS, ORTHOGONALS, king_attacks, knight_attacks, pawn_attacks, ray};
use crate::bitboard::Bitboard;
use crate::types::*;

/// Castling rights packed as four flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 1;
    pub const WHITE_QUEENSIDE: u8 = 2;
    pub const BLACK_KINGSIDE: u8 = 4;
    pub const BLACK_QUEENSIDE: u8 = 8;

    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(15);

    pub fn has(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    pub fn grant(&mut self, flag: u8) {
        self.0 |= flag;
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Drops every right that depends on a piece standing on `square`.
    /// Called for both the origin and the destination of each move.
    pub fn strip(&mut self, square: u8) {
        let lost = match square {
            0 => Self::WHITE_QUEENSIDE,
            4 => Self::WHITE_KINGSIDE | Self::WHITE_QUEENSIDE,
            7 => Self::WHITE_KINGSIDE,
            56 => Self::BLACK_QUEENSIDE,
            60 => Self::BLACK_KINGSIDE | Self::BLACK_QUEENSIDE,
            63 => Self::BLACK_KINGSIDE,
            _ => 0,
        };
        self.0 &= !lost;
    }
}

/// Geometry of one castling move.
pub struct Castle {
    pub right: u8,
    pub color: Color,
    pub king_from: u8,
    pub king_to: u8,
    pub rook_from: u8,
    pub rook_to: u8,
    /// Squares that must be empty.
    pub between: &'static [u8],
    /// Squares the king crosses, which must not be attacked.
    pub king_path: &'static [u8],
}

pub static CASTLES: [Castle; 4] = [
    Castle {
        right: CastlingRights::WHITE_KINGSIDE,
        color: Color::White,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        between: &[5, 6],
        king_path: &[5, 6],
    },
    Castle {
        right: CastlingRights::WHITE_QUEENSIDE,
        color: Color::White,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        between: &[1, 2, 3],
        king_path: &[3, 2],
    },
    Castle {
        right: CastlingRights::BLACK_KINGSIDE,
        color: Color::Black,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        between: &[61, 62],
        king_path: &[61, 62],
    },
    Castle {
        right: CastlingRights::BLACK_QUEENSIDE,
        color: Color::Black,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        between: &[57, 58, 59],
        king_path: &[59, 58],
    },
];

fn castle_for(mv: Move) -> Option<&'static Castle> {
    CASTLES
        .iter()
        .find(|c| c.king_from == mv.from && c.king_to == mv.to)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Board = Board {
        squares: [None; 64],
    };

    #[inline]
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    fn take(&mut self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize].take()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }

    pub fn occupied_by(&self, color: Color) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for (s, pc) in self.pieces() {
            if pc.color == color {
                bb.set(s);
            }
        }
        bb
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.pieces()
            .find(|&(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    /// First occupied square along a ray, with its piece.
    pub fn first_hit(&self, from: u8, dir: (i8, i8)) -> Option<(u8, Piece)> {
        ray(from, dir).find_map(|s| self.piece_at(s).map(|pc| (s, pc)))
    }

    /// Every square holding a `by` piece that attacks `target`.
    ///
    /// Pins and legality of the capture are ignored; a piece counts as an
    /// attacker as soon as its movement pattern reaches the square.
    pub fn attackers_of(&self, target: u8, by: Color) -> Bitboard {
        let mut found = Bitboard::EMPTY;

        // A `by` pawn attacks `target` from wherever an opposing pawn on
        // `target` would capture.
        let leapers = [
            (pawn_attacks(target, by.other()), PieceKind::Pawn),
            (knight_attacks(target), PieceKind::Knight),
            (king_attacks(target), PieceKind::King),
        ];
        for (origins, kind) in leapers {
            for s in origins {
                if self.piece_at(s) == Some(Piece::new(by, kind)) {
                    found.set(s);
                }
            }
        }

        let sliders = [
            (DIAGONALS, PieceKind::Bishop),
            (ORTHOGONALS, PieceKind::Rook),
        ];
        for (dirs, kind) in sliders {
            for dir in dirs {
                if let Some((s, pc)) = self.first_hit(target, dir)
                    && pc.color == by
                    && (pc.kind == kind || pc.kind == PieceKind::Queen)
                {
                    found.set(s);
                }
            }
        }

        found
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        !self.attackers_of(target, by).is_empty()
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// Moves pieces for `mv`: en-passant victim, promotion and the castling
    /// rook included. Returns the captured piece. Side-to-move bookkeeping
    /// lives in [`crate::Position`].
    pub fn relocate(&mut self, mv: Move) -> Option<Piece> {
        let moved = self.take(mv.from).expect("no piece on from-square");

        let captured = if mv.is_en_passant {
            let victim = rank_of(mv.from) as u8 * 8 + file_of(mv.to) as u8;
            self.take(victim)
        } else {
            self.piece_at(mv.to)
        };

        let placed = match mv.promo {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.set_piece(mv.to, Some(placed));

        if mv.is_castle
            && let Some(castle) = castle_for(mv)
        {
            let rook = self.take(castle.rook_from);
            self.set_piece(castle.rook_to, rook);
        }

        captured
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
