//! Baseline move selectors
//!
//! Two selectors with no evaluation at all, useful for:
//! - Testing the host plumbing before a real search is wired in
//! - Baseline comparisons (any real engine should easily beat these)
//! - Exercising the "no move" path of a host

use chess_core::{Engine, Rules, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Picks uniformly among the legal moves.
///
/// With a seed the sequence of choices is reproducible, which is what the
/// tests rely on; without one the generator is seeded from the OS.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<R: Rules> Engine<R> for RandomEngine {
    fn choose_move(&mut self, pos: &mut R, depth: u8) -> SearchResult<R::Move> {
        let moves = pos.legal_moves();
        let best_move = moves.choose(&mut self.rng).copied();
        debug!(choices = moves.len(), "random move");

        SearchResult {
            best_move,
            score: 0,
            depth,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v2.0"
    }
}

/// Never moves. Hosts see the same signal as for a finished game.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassEngine;

impl<R: Rules> Engine<R> for PassEngine {
    fn choose_move(&mut self, _pos: &mut R, depth: u8) -> SearchResult<R::Move> {
        SearchResult::no_move(depth)
    }

    fn name(&self) -> &str {
        "Pass v1.0"
    }
}
