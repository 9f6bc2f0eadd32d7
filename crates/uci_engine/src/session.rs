//! The UCI command loop.
//!
//! Searches run to completion on the calling thread, so `stop` has nothing
//! to interrupt and time controls on `go` are ignored.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_core::{set_position_from_uci, Engine, Position};
use classical_engine::{DrawPolicy, Evaluator, MAX_DEPTH};
use tracing::{debug, info, warn};

use crate::settings::Settings;

pub struct Session {
    settings: Settings,
    engine: Box<dyn Engine<Position>>,
    pos: Position,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let engine = settings.build_engine();
        Self {
            settings,
            engine,
            pos: Position::startpos(),
        }
    }

    /// Handles one input line. Returns `false` once the host asks to quit.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(true);
        };

        match command {
            "uci" => self.identify(out)?,
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = set_position_from_uci(&mut self.pos, &parts[1..]) {
                    warn!(%err, "position command ignored");
                }
            }
            "go" => self.go(&parts[1..], out)?,
            "quit" => return Ok(false),
            "stop" => {}
            other => debug!(command = other, "unknown command"),
        }

        out.flush()?;
        Ok(true)
    }

    fn identify(&self, out: &mut impl Write) -> Result<()> {
        let search = &self.settings.search;
        let evaluators: String = Evaluator::ALL.iter().map(|e| format!(" var {e}")).collect();
        let policies: String = DrawPolicy::ALL.iter().map(|p| format!(" var {p}")).collect();

        writeln!(out, "id name {}", self.engine.name())?;
        writeln!(out, "id author {}", self.engine.author())?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
            search.depth
        )?;
        writeln!(
            out,
            "option name Evaluator type combo default {}{evaluators}",
            search.evaluator
        )?;
        writeln!(
            out,
            "option name DrawPolicy type combo default {}{policies}",
            search.draw_policy
        )?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    /// `setoption name <name> [value <value>]`
    fn set_option(&mut self, args: &[&str]) {
        let Some(name_at) = args.iter().position(|&a| a == "name") else {
            return;
        };
        let value_at = args.iter().position(|&a| a == "value").unwrap_or(args.len());
        if value_at < name_at {
            return;
        }
        let name = args[name_at + 1..value_at].join(" ");
        let value = args.get(value_at + 1..).map(|v| v.join(" ")).unwrap_or_default();

        match self.settings.search.set(&name, &value) {
            Ok(true) => {
                self.engine.set_option(&name, &value);
                info!(%name, %value, "option set");
            }
            Ok(false) => {
                if !self.engine.set_option(&name, &value) {
                    debug!(%name, "unknown option");
                }
            }
            Err(err) => warn!(%err, "option ignored"),
        }
    }

    fn go(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let depth = match args.iter().position(|&a| a == "depth") {
            Some(at) => match args.get(at + 1).and_then(|raw| raw.parse::<u8>().ok()) {
                Some(depth) => depth.clamp(1, MAX_DEPTH),
                None => {
                    warn!("go depth missing or invalid, using the configured depth");
                    self.settings.search.depth
                }
            },
            None => self.settings.search.depth,
        };

        let result = self.engine.choose_move(&mut self.pos, depth);
        // Mate scores carry no distance to mate, so they go out as `cp` like any other
        let mover_score = result.score * self.pos.side_to_move().sign();
        writeln!(
            out,
            "info depth {} score cp {} nodes {}",
            result.depth, mover_score, result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {mv}")?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }
}

/// Reads commands until `quit` or end of input.
pub fn run(input: impl BufRead, mut out: impl Write, settings: Settings) -> Result<()> {
    let mut session = Session::new(settings);
    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        match session.handle(line.trim(), &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => warn!("command failed: {err:#}"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
