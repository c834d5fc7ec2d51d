//! Engine and driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal driver, loaded from TOML.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board dimension used by `new` when no size is given.
    #[serde(default = "default_dimension")]
    default_dimension: usize,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Whether empty cells are drawn with their index.
    #[serde(default = "default_show_indices")]
    show_indices: bool,
}

fn default_dimension() -> usize {
    3
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_indices() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_dimension: default_dimension(),
            log_filter: default_log_filter(),
            show_indices: default_show_indices(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A `default_dimension` of zero is rejected here rather than at the
    /// first `new` command.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            default_dimension = config.default_dimension,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validated()
    }

    /// Overrides the default dimension (from a command-line flag).
    ///
    /// Zero is rejected the same way it is in a config file.
    #[instrument(skip(self))]
    pub fn with_default_dimension(mut self, dimension: usize) -> Result<Self, ConfigError> {
        self.default_dimension = dimension;
        self.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.default_dimension == 0 {
            return Err(ConfigError::new(
                "default_dimension must be at least 1".to_string(),
            ));
        }
        Ok(self)
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
    #[instrument(skip(message))]
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
    fn test_empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.default_dimension(), 3);
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_indices());
    }

    #[test]
    fn test_partial_toml() {
        let config =
            EngineConfig::from_toml("default_dimension = 5\nshow_indices = false").unwrap();
        assert_eq!(*config.default_dimension(), 5);
        assert!(!*config.show_indices());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = EngineConfig::from_toml("default_dimension = 0").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_dimension_override() {
        let config = EngineConfig::default().with_default_dimension(7).unwrap();
        assert_eq!(*config.default_dimension(), 7);

        let err = EngineConfig::default()
            .with_default_dimension(0)
            .unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(EngineConfig::from_toml("default_dimension = \"big\"").is_err());
    }
}
