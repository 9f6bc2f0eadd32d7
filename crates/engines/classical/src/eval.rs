//! Static evaluation: material, piece-square tables and a safety check.
//!
//! Scores are in centipawns from White's point of view: positive favors
//! White, negative favors Black, whoever is to move.

use std::fmt;
use std::str::FromStr;

use chess_core::{Color, Piece, PieceKind, Rules};
use serde::{Deserialize, Serialize};

use crate::pst;

/// Score of a checkmate. Larger than anything the terms below can add up to.
pub const MATE_SCORE: i32 = 100_000;

/// Material values in centipawns, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 300, 320, 500, 900, 0];

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Which terms the evaluation includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluator {
    /// Material balance only.
    Material,
    /// Material plus piece-square bonuses.
    Positional,
    /// Material, piece-square bonuses and the safety adjustment.
    #[default]
    Full,
}

impl Evaluator {
    pub const ALL: [Evaluator; 3] = [Evaluator::Material, Evaluator::Positional, Evaluator::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            Evaluator::Material => "material",
            Evaluator::Positional => "positional",
            Evaluator::Full => "full",
        }
    }

    /// Scores `pos`. Checkmate short-circuits every other term.
    pub fn evaluate<R: Rules>(self, pos: &R) -> i32 {
        if pos.is_checkmate() {
            return match pos.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        self.breakdown(pos).total()
    }

    /// The individual terms, without the checkmate check.
    pub fn breakdown<R: Rules>(self, pos: &R) -> Breakdown {
        let mut out = Breakdown::default();

        for (sq, piece) in pos.pieces() {
            if piece.kind == PieceKind::King {
                continue;
            }
            let sign = piece.color.sign();
            let value = piece_value(piece.kind);
            out.material += sign * value;

            match self {
                Evaluator::Material => {}
                Evaluator::Positional => out.positional += sign * pst::bonus(piece, sq),
                Evaluator::Full => {
                    // A hanging piece trades its square bonus for the loss of its value
                    if is_hanging(pos, piece, sq) {
                        out.safety -= sign * value;
                    } else {
                        out.positional += sign * pst::bonus(piece, sq);
                    }
                }
            }
        }

        out
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Evaluator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Evaluator::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown evaluator '{s}'"))
    }
}

/// Evaluation split by term, all White-positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub material: i32,
    pub positional: i32,
    pub safety: i32,
}

impl Breakdown {
    pub fn total(&self) -> i32 {
        self.material + self.positional + self.safety
    }
}

/// True when fewer friendly than enemy pieces attack `piece` on `sq`.
/// Counts only; piece values, exchange order and pins are ignored.
pub fn is_hanging<R: Rules>(pos: &R, piece: Piece, sq: u8) -> bool {
    let defenders = pos.attackers(piece.color, sq);
    let attackers = pos.attackers(piece.color.other(), sq);
    defenders < attackers
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
