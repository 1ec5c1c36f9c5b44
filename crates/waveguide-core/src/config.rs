//! TOML display configuration shared by the front ends.
//!
//! ```toml
//! [history]
//! order = "newest_first"
//!
//! [window]
//! width = 520.0
//! height = 560.0
//! ```
//!
//! Every section and key is optional. Configuration is read-only; nothing
//! from a session is ever written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::history::HistoryOrder;

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

/// History presentation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistoryConfig {
    /// "oldest_first" (default) or "newest_first".
    #[serde(default)]
    pub order: HistoryOrder,
}

/// Initial desktop window size in points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

fn default_window_width() -> f32 {
    500.0
}
fn default_window_height() -> f32 {
    500.0
}

impl CalculatorConfig {
    /// Load and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.history.order, HistoryOrder::OldestFirst);
        assert_eq!(config.window.width, 500.0);
    }

    #[test]
    fn test_full_config() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            [history]
            order = "newest_first"

            [window]
            width = 640.0
            "#,
        )
        .unwrap();
        assert_eq!(config.history.order, HistoryOrder::NewestFirst);
        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.window.height, 500.0);
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        let err = CalculatorConfig::from_toml_str("[history]\norder = \"sideways\"\n");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = CalculatorConfig::load(Path::new("/nonexistent/waveguide.toml"));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }
}
