//! Search configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::Evaluator;
use crate::search::DrawPolicy;

/// Deepest search a configuration may ask for.
pub const MAX_DEPTH: u8 = 8;
pub const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("depth {0} out of range (1..={max})", max = MAX_DEPTH)]
    DepthOutOfRange(u8),
    #[error("invalid value '{value}' for option {option}")]
    InvalidValue { option: String, value: String },
}

/// ```toml
/// depth = 3
/// evaluator = "full"        # material | positional | full
/// draw_policy = "evaluate"  # evaluate | zero
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub depth: u8,
    pub evaluator: Evaluator,
    pub draw_policy: DrawPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluator: Evaluator::default(),
            draw_policy: DrawPolicy::default(),
        }
    }
}

impl SearchConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }

    /// Applies one `name = value` override, as sent by a UCI `setoption`.
    ///
    /// Returns `Ok(false)` for names this config does not know, and leaves
    /// the config unchanged on error.
    pub fn set(&mut self, name: &str, value: &str) -> Result<bool, ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            option: name.to_string(),
            value: value.to_string(),
        };

        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value.trim().parse().map_err(|_| invalid())?;
                let next = SearchConfig { depth, ..*self };
                next.validate()?;
                *self = next;
            }
            "evaluator" => self.evaluator = value.parse().map_err(|_| invalid())?,
            "drawpolicy" | "draw_policy" => {
                self.draw_policy = value.parse().map_err(|_| invalid())?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
