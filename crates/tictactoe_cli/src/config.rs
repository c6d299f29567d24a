//! Display configuration for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Front-end settings, loaded from TOML.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Show the move history after every action.
    show_history: bool,

    /// Show the `Turn: <n>` line.
    show_turn: bool,

    /// Input prompt.
    prompt: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            show_history: true,
            show_turn: true,
            prompt: "> ".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(*config.show_history());
        assert!(*config.show_turn());
        assert_eq!(config.prompt(), "> ");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CliConfig = toml::from_str("show_history = false").expect("parse");
        assert!(!*config.show_history());
        assert!(*config.show_turn());
        assert_eq!(config.prompt(), "> ");
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).expect("defaults"), CliConfig::default());
    }
}
