//! Game configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use solved_tictactoe::Mark;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
///
/// The computer always plays the human's opponent.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Mark the human plays (X moves first).
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Cosmetic pause before the computer answers, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_think_delay_ms() -> u64 {
    500
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human_mark, think_delay_ms = config.think_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Mark the computer plays.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            think_delay_ms: default_think_delay_ms(),
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
        let config = GameConfig::default();
        assert_eq!(*config.human_mark(), Mark::X);
        assert_eq!(config.computer_mark(), Mark::O);
        assert_eq!(config.think_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml(r#"human_mark = "O""#).unwrap();
        assert_eq!(*config.human_mark(), Mark::O);
        assert_eq!(*config.think_delay_ms(), 500);
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default().with_think_delay_ms(0).with_human_mark(Mark::O);
        assert_eq!(config.computer_mark(), Mark::X);
        assert_eq!(config.think_delay(), Duration::ZERO);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = GameConfig::from_toml("human_mark = \"Z\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
