//! Widget configuration
//!
//! Loaded from an optional YAML file; every field has a default so an
//! empty or partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for this schema
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Equation widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquationConfig {
    /// Block title shown around the widget
    pub title: String,
    /// Capture mouse events in the terminal
    pub mouse: bool,
    /// Render the key help line
    pub show_help: bool,
    /// Default tracing filter directive
    pub log_level: String,
}

impl Default for EquationConfig {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            mouse: true,
            show_help: true,
            log_level: "info".to_string(),
        }
    }
}

impl EquationConfig {
    /// Default block title
    pub const DEFAULT_TITLE: &'static str = " Equation ";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        // an empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Set title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set help line visibility
    #[must_use]
    pub const fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EquationConfig::default();
        assert_eq!(config.title, EquationConfig::DEFAULT_TITLE);
        assert!(config.mouse);
        assert!(config.show_help);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_builder_chain() {
        let config = EquationConfig::new()
            .with_title("Sum")
            .with_mouse(false)
            .with_help(false)
            .with_log_level("debug");
        assert_eq!(config.title, "Sum");
        assert!(!config.mouse);
        assert!(!config.show_help);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = EquationConfig::from_yaml("mouse: false\n").unwrap();
        assert!(!config.mouse);
        assert!(config.show_help);
        assert_eq!(config.title, EquationConfig::DEFAULT_TITLE);
    }

    #[test]
    fn test_from_yaml_empty() {
        let config = EquationConfig::from_yaml("").unwrap();
        assert_eq!(config, EquationConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(EquationConfig::from_yaml("mouse: [not, a, bool]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: Counter\nlog_level: trace").unwrap();

        let config = EquationConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Counter");
        assert_eq!(config.log_level, "trace");
        assert!(config.mouse);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EquationConfig::load(Path::new("/nonexistent/equation.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_help: 12:34:56:bad").unwrap();
        writeln!(file, "mouse: {{").unwrap();

        let err = EquationConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
