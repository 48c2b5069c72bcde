//! Front-end settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// File the interactive mode writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Start with the move list newest first.
    #[serde(default)]
    #[getter(copy)]
    start_reversed: bool,

    /// Terminal width below which the compact layout is used.
    #[serde(default = "default_compact_width")]
    #[getter(copy)]
    compact_width: u16,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_compact_width() -> u16 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            start_reversed: false,
            compact_width: default_compact_width(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if settings.compact_width == 0 {
            return Err(ConfigError::new(
                "compact_width must be greater than zero".to_string(),
            ));
        }
        Ok(settings)
    }

    /// Loads settings from `path` when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
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
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml("start_reversed = true\ncompact_width = 80\n").unwrap();
        assert!(settings.start_reversed());
        assert_eq!(settings.compact_width(), 80);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Settings::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_compact_width_is_rejected() {
        assert!(Settings::from_toml("compact_width = 0").is_err());
    }
}
