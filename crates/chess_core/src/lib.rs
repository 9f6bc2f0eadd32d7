pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod rules;
pub mod types;
pub mod uci;
pub mod zobrist;

// Re-export the rules engine surface
pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use fen::{FenError, STARTPOS_FEN};
pub use movegen::*;
pub use perft::perft;
pub use position::*;
pub use rules::Rules;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: implemented by every move selector
// =============================================================================

/// Result of one move selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The chosen move (None if no legal moves, or the selector declines)
    pub best_move: Option<M>,
    /// Score in centipawns, positive favors White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

impl<M> SearchResult<M> {
    /// A result carrying no move.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all move selectors implement.
///
/// The position is borrowed mutably for the duration of the call: a selector
/// may push and pop moves while it thinks, but must hand the position back
/// exactly as it received it.
pub trait Engine<R: Rules>: Send {
    /// Choose a move for the side to move, searching `depth` plies.
    fn choose_move(&mut self, pos: &mut R, depth: u8) -> SearchResult<R::Move>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
