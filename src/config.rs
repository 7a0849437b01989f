//! CLI configuration.
//!
//! Configuration is loaded in the following order (later overrides earlier):
//! 1. Default values
//! 2. YAML config file (if specified via KEYCALC_CONFIG or --config)
//! 3. Environment variables

use keycalc_display::DisplayOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {}", .path.display(), .reason)]
    Parse { path: PathBuf, reason: String },

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// keycalc configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display formatting.
    pub display: DisplayOptions,
    /// Interactive session settings.
    pub repl: ReplConfig,
}

impl Config {
    /// Loads configuration from an optional file, then applies environment
    /// variable overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// production).
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(width) = var("KEYCALC_MAX_WIDTH").and_then(|v| v.parse().ok()) {
            self.display.max_width = width;
        }
        if let Some(digits) = var("KEYCALC_EXPONENT_DIGITS").and_then(|v| v.parse().ok()) {
            self.display.exponent_digits = digits;
        }
        if let Some(text) = var("KEYCALC_ERROR_TEXT") {
            self.display.error_text = text;
        }
        if let Some(path) = var("KEYCALC_HISTORY") {
            self.repl.history_file = Some(PathBuf::from(path));
        }
        if let Some(show) = var("KEYCALC_SHOW_CLOCK") {
            self.repl.show_clock = show == "1" || show.to_lowercase() == "true";
        }
    }

    /// Validates configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_width == 0 {
            return Err(ConfigError::Validation(
                "display.max_width must be at least 1".to_string(),
            ));
        }
        if self.repl.prompt.trim().is_empty() {
            return Err(ConfigError::Validation(
                "repl.prompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Interactive session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// History file. Defaults to `~/.keycalc_history`.
    pub history_file: Option<PathBuf>,
    /// Prompt text.
    pub prompt: String,
    /// Print the clock next to each result.
    pub show_clock: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            prompt: "keycalc>".to_string(),
            show_clock: false,
        }
    }
}

impl ReplConfig {
    /// Returns the history file path.
    pub fn history_path(&self) -> PathBuf {
        self.history_file.clone().unwrap_or_else(|| {
            std::env::var("HOME")
                .map(|h| PathBuf::from(h).join(".keycalc_history"))
                .unwrap_or_else(|_| ".keycalc_history".into())
        })
    }
}
