mod session;
mod settings;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// `uci_engine [--config <path>]`
fn config_path(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(p) => path = Some(PathBuf::from(p)),
                None => bail!("--config needs a path"),
            },
            other => match other.strip_prefix("--config=") {
                Some(p) => path = Some(PathBuf::from(p)),
                None => bail!("unexpected argument '{other}'"),
            },
        }
    }
    Ok(path)
}

fn main() -> Result<()> {
    // stdout belongs to the UCI protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = match config_path(std::env::args().skip(1))? {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    info!(?settings, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(stdin.lock(), stdout.lock(), settings)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
