//! Classical Chess Engine
//!
//! Fixed-depth alpha-beta search over whatever rules engine implements
//! [`chess_core::Rules`], scored by material, piece-square tables and an
//! attacker/defender safety check.

pub mod config;
pub mod eval;
pub mod pst;
pub mod search;

use chess_core::{Engine, Rules, SearchResult};

pub use config::{ConfigError, SearchConfig, MAX_DEPTH};
pub use eval::{piece_value, Breakdown, Evaluator, MATE_SCORE};
pub use search::{DrawPolicy, Played, Searcher};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth minimax with alpha-beta pruning, no move ordering
/// - Material, piece-square and safety evaluation (selectable)
/// - Configurable scoring of drawn leaves
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: SearchConfig,
}

impl ClassicalEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<R: Rules> Engine<R> for ClassicalEngine {
    fn choose_move(&mut self, pos: &mut R, depth: u8) -> SearchResult<R::Move> {
        Searcher::new(self.config.evaluator, self.config.draw_policy).choose_move(pos, depth)
    }

    fn name(&self) -> &str {
        "Classical v2.0"
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match self.config.set(name, value) {
            Ok(known) => known,
            Err(err) => {
                tracing::warn!(%err, "option ignored");
                true
            }
        }
    }
}
