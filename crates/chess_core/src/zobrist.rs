//! Zobrist keys for repetition detection.
//!
//! A position key XORs one random value per (piece, square), plus values for
//! Black to move, each castling right and the en-passant file. Keys are
//! generated at compile time from a fixed xorshift seed, so they are stable
//! across runs.

use crate::board::{Board, CastlingRights};
use crate::types::{Color, Piece, file_of};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// One key per castling flag bit (wk, wq, bk, bq)
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

impl ZobristKeys {
    pub const fn new() -> Self {
        let mut state = 0x123456789ABCDEF0u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut i = 0;
        while i < 2 * 6 * 64 {
            state = xorshift64(state);
            pieces[i / 384][(i / 64) % 6][i % 64] = state;
            i += 1;
        }

        state = xorshift64(state);
        let black_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Full key of a position, computed from scratch.
    pub fn position_key(
        &self,
        board: &Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<u8>,
    ) -> u64 {
        let mut key = 0u64;
        for (sq, pc) in board.pieces() {
            key ^= self.piece_key(pc, sq);
        }
        if side_to_move == Color::Black {
            key ^= self.black_to_move;
        }
        for (bit, value) in self.castling.iter().enumerate() {
            if castling.has(1 << bit) {
                key ^= value;
            }
        }
        if let Some(ep) = en_passant {
            key ^= self.en_passant[file_of(ep) as usize];
        }
        key
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
