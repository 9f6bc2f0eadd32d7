//! Game state with an in-place push/pop move stack.

use crate::bitboard::Bitboard;
use crate::board::{Board, CastlingRights};
use crate::attacks::pawn_attacks;
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Halfmove clock at which the game ends without a claim.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
/// Occurrences of one position that end the game without a claim.
pub const FIVEFOLD: usize = 5;

/// Why a game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Everything `pop` needs to restore the state before a push.
#[derive(Clone, Debug)]
struct Snapshot {
    mv: Move,
    board: Board,
    castling: CastlingRights,
    en_passant: Option<u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    stack: Vec<Snapshot>,
    /// Keys of every position since setup; the last one is the current key.
    keys: Vec<u64>,
}

impl Position {
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<u8>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            stack: Vec::new(),
            keys: Vec::new(),
        };
        pos.keys.push(pos.compute_key());
        pos
    }

    pub fn startpos() -> Self {
        let mut board = Board::EMPTY;
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            board.set_piece(f, Some(Piece::new(Color::White, kind)));
            board.set_piece(8 + f, Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set_piece(48 + f, Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set_piece(56 + f, Some(Piece::new(Color::Black, kind)));
        }
        Self::from_parts(board, Color::White, CastlingRights::ALL, None, 0, 1)
    }

    fn compute_key(&self) -> u64 {
        ZOBRIST.position_key(
            &self.board,
            self.side_to_move,
            self.castling,
            self.capturable_en_passant(),
        )
    }

    /// The en-passant square, only if the side to move has a legal capture
    /// onto it. A bare double push does not make two positions different.
    fn capturable_en_passant(&self) -> Option<u8> {
        let ep = self.en_passant?;
        let us = self.side_to_move;
        let own_pawn = Piece::new(us, PieceKind::Pawn);
        let mut takers = pawn_attacks(ep, us.other());
        if !takers.any(|sq| self.board.piece_at(sq) == Some(own_pawn)) {
            return None;
        }
        legal_moves(self)
            .iter()
            .any(|m| m.is_en_passant)
            .then_some(ep)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<u8> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn key(&self) -> u64 {
        self.keys.last().copied().unwrap_or_else(|| self.compute_key())
    }

    /// Number of moves that `pop` can take back.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.stack.last().map(|s| s.mv)
    }

    pub fn in_check(&self) -> bool {
        self.board.in_check(self.side_to_move)
    }

    pub fn attackers(&self, by: Color, sq: u8) -> Bitboard {
        self.board.attackers_of(sq, by)
    }

    /// Plays `mv`, which must be legal in this position.
    pub fn push(&mut self, mv: Move) {
        let moved = self
            .board
            .piece_at(mv.from)
            .expect("push: no piece on the from-square");

        self.stack.push(Snapshot {
            mv,
            board: self.board,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        let captured = self.board.relocate(mv);

        self.castling.strip(mv.from);
        self.castling.strip(mv.to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            self.en_passant = sq(file_of(mv.from), (rank_of(mv.from) + rank_of(mv.to)) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.other();

        self.keys.push(self.compute_key());
    }

    /// Takes back the most recent push and returns its move.
    ///
    /// # Panics
    /// When there is nothing to take back: that is a caller bug, not a
    /// game state.
    pub fn pop(&mut self) -> Move {
        let snap = self
            .stack
            .pop()
            .expect("pop called without a matching push");
        self.board = snap.board;
        self.castling = snap.castling;
        self.en_passant = snap.en_passant;
        self.halfmove_clock = snap.halfmove_clock;
        self.fullmove_number = snap.fullmove_number;
        self.side_to_move = self.side_to_move.other();
        self.keys.pop();
        snap.mv
    }

    /// How many times the current position occurred, this one included.
    pub fn repetitions(&self) -> usize {
        let current = self.key();
        self.keys.iter().filter(|&&k| k == current).count()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !has_legal_move(self)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !has_legal_move(self)
    }

    /// Neither side can ever mate: only kings plus at most one minor piece,
    /// or only bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut bishops = Bitboard::EMPTY;
        for (s, pc) in self.board.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => {
                    knights += 1;
                    minors += 1;
                }
                PieceKind::Bishop => {
                    bishops.set(s);
                    minors += 1;
                }
            }
        }
        if minors <= 1 {
            return true;
        }
        let dark = (bishops & Bitboard::DARK_SQUARES).popcount();
        knights == 0 && (dark == 0 || dark == bishops.popcount())
    }

    pub fn is_seventy_five_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= FIVEFOLD
    }

    /// The reason the game is over, if it is. Checkmate wins over every
    /// draw rule.
    pub fn outcome(&self) -> Option<Outcome> {
        let stuck = !has_legal_move(self);
        if stuck && self.in_check() {
            return Some(Outcome::Checkmate {
                winner: self.side_to_move.other(),
            });
        }
        if self.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if stuck {
            Some(Outcome::Stalemate)
        } else if self.is_seventy_five_moves() {
            Some(Outcome::SeventyFiveMoves)
        } else if self.is_fivefold_repetition() {
            Some(Outcome::FivefoldRepetition)
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
