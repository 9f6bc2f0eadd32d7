//! Start-up settings, read from a TOML file.
//!
//! ```toml
//! selector = "search"   # search | random | pass
//! seed = 42             # random selector only
//!
//! [search]
//! depth = 3
//! evaluator = "full"
//! draw_policy = "evaluate"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use baseline_engine::{PassEngine, RandomEngine};
use chess_core::{Engine, Position};
use classical_engine::{ClassicalEngine, SearchConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    #[default]
    Search,
    Random,
    Pass,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub selector: Selector,
    pub seed: Option<u64>,
    pub search: SearchConfig,
}

impl Settings {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(src).context("malformed settings")?;
        settings.search.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&src).with_context(|| format!("in {}", path.display()))
    }

    pub fn build_engine(&self) -> Box<dyn Engine<Position>> {
        match self.selector {
            Selector::Search => Box::new(ClassicalEngine::new(self.search)),
            Selector::Random => Box::new(RandomEngine::new(self.seed)),
            Selector::Pass => Box::new(PassEngine),
        }
    }
}
