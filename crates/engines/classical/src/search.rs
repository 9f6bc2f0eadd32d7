//! Fixed-depth minimax with alpha-beta pruning

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use chess_core::{Color, Rules, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::eval::{Evaluator, MATE_SCORE};

/// How leaves that end the game without checkmate are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPolicy {
    /// Stalemates and drawn endings get the static evaluation like any leaf.
    #[default]
    Evaluate,
    /// Stalemates and drawn endings score 0.
    Zero,
}

impl DrawPolicy {
    pub const ALL: [DrawPolicy; 2] = [DrawPolicy::Evaluate, DrawPolicy::Zero];

    pub fn as_str(self) -> &'static str {
        match self {
            DrawPolicy::Evaluate => "evaluate",
            DrawPolicy::Zero => "zero",
        }
    }
}

impl fmt::Display for DrawPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawPolicy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown draw policy '{s}'"))
    }
}

/// A move played on a borrowed position, taken back when the guard drops.
///
/// Dropping happens on every way out of a scope (early `break`, `return`,
/// unwinding), so the position always comes back to its caller intact.
pub struct Played<'a, R: Rules> {
    pos: &'a mut R,
}

impl<'a, R: Rules> Played<'a, R> {
    pub fn new(pos: &'a mut R, mv: R::Move) -> Self {
        pos.push(mv);
        Self { pos }
    }
}

impl<R: Rules> Deref for Played<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules> DerefMut for Played<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules> Drop for Played<'_, R> {
    fn drop(&mut self) {
        self.pos.pop();
    }
}

/// State for one search call. Only the node counter changes while it runs.
#[derive(Debug, Clone)]
pub struct Searcher {
    pub evaluator: Evaluator,
    pub draw_policy: DrawPolicy,
    nodes: u64,
}

impl Searcher {
    pub fn new(evaluator: Evaluator, draw_policy: DrawPolicy) -> Self {
        Self {
            evaluator,
            draw_policy,
            nodes: 0,
        }
    }

    /// Nodes visited since the last `choose_move` started.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn leaf_score<R: Rules>(&self, pos: &R) -> i32 {
        if self.draw_policy == DrawPolicy::Zero && !pos.is_checkmate() && pos.is_game_over() {
            return 0;
        }
        self.evaluator.evaluate(pos)
    }

    /// Minimax value of `pos` searched `depth` plies deep.
    ///
    /// `maximizing` is true when White is to move. Moves are tried in the
    /// order the rules engine gives them; siblings are cut once `beta <= alpha`.
    pub fn alpha_beta<R: Rules>(
        &mut self,
        pos: &mut R,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return self.leaf_score(pos);
        }

        if maximizing {
            let mut best = -MATE_SCORE;
            for mv in pos.legal_moves() {
                let score = {
                    let mut child = Played::new(pos, mv);
                    self.alpha_beta(&mut *child, depth - 1, alpha, beta, false)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = MATE_SCORE;
            for mv in pos.legal_moves() {
                let score = {
                    let mut child = Played::new(pos, mv);
                    self.alpha_beta(&mut *child, depth - 1, alpha, beta, true)
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Picks a move for the side to move by searching `depth` plies.
    ///
    /// Every root move is searched with a full window. A move replaces the
    /// one held only if it scores strictly better for the mover, so ties go
    /// to the earliest move, and some move is always held once one has been
    /// searched. With no legal moves the result carries no move and the
    /// position's own score.
    ///
    /// A missing move always means the game is over: when every move loses
    /// to mate, the first one is still returned.
    pub fn choose_move<R: Rules>(&mut self, pos: &mut R, depth: u8) -> SearchResult<R::Move> {
        self.nodes = 1;
        let root = pos.side_to_move();
        let moves = pos.legal_moves();

        if moves.is_empty() {
            let score = self.leaf_score(pos);
            info!(score, "no legal moves");
            return SearchResult {
                best_move: None,
                score,
                depth,
                nodes: self.nodes,
            };
        }

        let maximizing = root == Color::White;
        let mut best_value = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        let mut best_move = None;

        for mv in moves {
            let score = {
                let mut child = Played::new(pos, mv);
                self.alpha_beta(
                    &mut *child,
                    depth.saturating_sub(1),
                    -MATE_SCORE,
                    MATE_SCORE,
                    !maximizing,
                )
            };
            debug!(%mv, score, "root move");

            let improves = if maximizing {
                score > best_value
            } else {
                score < best_value
            };
            if improves || best_move.is_none() {
                best_value = score;
                best_move = Some(mv);
            }
        }

        if let Some(mv) = best_move {
            info!(%mv, score = best_value, depth, nodes = self.nodes, "best move");
        }

        SearchResult {
            best_move,
            score: best_value,
            depth,
            nodes: self.nodes,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Evaluator::default(), DrawPolicy::default())
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
