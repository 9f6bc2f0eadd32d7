//! The contract between a move selector and whatever knows the rules.
//!
//! Engines are written against [`Rules`] only. They treat moves as opaque
//! tokens, mutate the position strictly through `push`/`pop`, and read the
//! board through the query methods.

use std::fmt;

use crate::movegen::legal_moves;
use crate::position::Position;
use crate::types::{Color, Move, Piece};

pub trait Rules {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Legal moves in the rules engine's own order. Callers never re-sort.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a legal move in place.
    fn push(&mut self, mv: Self::Move);

    /// Restores the state from before the most recent `push`.
    /// Calling it with nothing to take back is a contract violation.
    fn pop(&mut self);

    fn is_checkmate(&self) -> bool;

    /// Checkmate, stalemate, or any draw that ends the game outright.
    fn is_game_over(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// How many `by` pieces attack `square`.
    fn attackers(&self, by: Color, square: u8) -> u32;

    /// Every piece on the board with its square.
    fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_;
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    fn push(&mut self, mv: Move) {
        Position::push(self, mv);
    }

    fn pop(&mut self) {
        Position::pop(self);
    }

    fn is_checkmate(&self) -> bool {
        Position::is_checkmate(self)
    }

    fn is_game_over(&self) -> bool {
        Position::is_game_over(self)
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn attackers(&self, by: Color, square: u8) -> u32 {
        Position::attackers(self, by, square).popcount()
    }

    fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board.pieces()
    }
}
