//! UCI move and position parsing.

use thiserror::Error;

use crate::fen::FenError;
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UciError {
    #[error("malformed move '{0}'")]
    MalformedMove(String),
    #[error("illegal move '{0}'")]
    IllegalMove(String),
    #[error("expected 'startpos' or 'fen', found '{0}'")]
    UnknownSetup(String),
    #[error(transparent)]
    Fen(#[from] FenError),
}

/// Parses a move in long algebraic notation and matches it against the legal
/// moves, so castling and en-passant flags come out right.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, UciError> {
    let malformed = || UciError::MalformedMove(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(malformed());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(malformed)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(malformed)?;
    let promo = match txt[4..].chars().next() {
        Some(ch) => Some(
            PieceKind::from_letter(ch)
                .filter(|k| PieceKind::PROMOTIONS.contains(k))
                .ok_or_else(malformed)?,
        ),
        None => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
        .ok_or_else(|| UciError::IllegalMove(txt.to_string()))
}

/// Applies the arguments of a `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
///
/// Moves are pushed, so the game history stays available for repetition
/// detection. On error `pos` is left untouched.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), UciError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut next = match setup.first().copied() {
        None | Some("startpos") => Position::startpos(),
        Some("fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(UciError::UnknownSetup(other.to_string())),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(&next, txt)?;
        next.push(mv);
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
