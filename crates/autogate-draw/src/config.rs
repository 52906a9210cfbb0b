//! Diagram rendering configuration.
//!
//! [`DiagramConfig::load`] resolves settings in this order (highest to lowest):
//! 1. Environment variables (`AUTOGATE_DIAGRAM_MAX_WIDTH`)
//! 2. Configuration file (YAML)
//! 3. Default values
//!
//! A width passed to `Diagram::render_with_width` or
//! `AsciiDiagram::ascii_diagram(Some(..))` bypasses configuration entirely, and
//! `ascii_diagram(None)` uses [`DiagramConfig::default`] without reading the
//! environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding [`DiagramConfig::max_width`].
pub const MAX_WIDTH_ENV: &str = "AUTOGATE_DIAGRAM_MAX_WIDTH";

/// Default maximum output width, in characters.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Settings for ASCII diagram rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Maximum width of any output line, qubit label column included.
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
        }
    }
}

impl DiagramConfig {
    /// Set the maximum output width.
    #[must_use]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: DiagramConfig = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from `config_file` if given, otherwise defaults, then apply
    /// environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Only variables that are set and parse cleanly override the current values.
    fn merge_env(mut self) -> Self {
        if let Ok(v) = std::env::var(MAX_WIDTH_ENV) {
            if let Ok(val) = v.trim().parse() {
                self.max_width = val;
            }
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 {
            return Err(ConfigError::Invalid("max_width must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_width() {
        assert_eq!(DiagramConfig::default().max_width, 80);
        assert_eq!(DiagramConfig::default().with_max_width(40).max_width, 40);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_width: 120").unwrap();
        let config = DiagramConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_width, 120);
    }

    #[test]
    fn test_from_file_missing_field_uses_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{}}").unwrap();
        let config = DiagramConfig::from_file(file.path()).unwrap();
        assert_eq!(config, DiagramConfig::default());
    }

    #[test]
    fn test_from_file_errors() {
        let missing = DiagramConfig::from_file("/nonexistent/autogate.yaml");
        assert!(matches!(missing, Err(ConfigError::IoError(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_width: wide").unwrap();
        let bad = DiagramConfig::from_file(file.path());
        assert!(matches!(bad, Err(ConfigError::ParseError(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_width: 0").unwrap();
        let zero = DiagramConfig::from_file(file.path());
        assert!(matches!(zero, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_env_overrides() {
        // Every case touching the variable lives in this one test.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_width: 120").unwrap();

        // SAFETY: no other test in this crate reads or writes this variable
        unsafe {
            std::env::remove_var(MAX_WIDTH_ENV);
        }
        assert_eq!(DiagramConfig::from_env().unwrap(), DiagramConfig::default());
        assert_eq!(DiagramConfig::load(Some(file.path())).unwrap().max_width, 120);

        // SAFETY: as above
        unsafe {
            std::env::set_var(MAX_WIDTH_ENV, " 64 ");
        }
        assert_eq!(DiagramConfig::from_env().unwrap().max_width, 64);
        assert_eq!(DiagramConfig::load(Some(file.path())).unwrap().max_width, 64);

        // SAFETY: as above
        unsafe {
            std::env::set_var(MAX_WIDTH_ENV, "abc");
        }
        assert_eq!(DiagramConfig::from_env().unwrap().max_width, 80);
        assert_eq!(DiagramConfig::load(Some(file.path())).unwrap().max_width, 120);

        // SAFETY: as above
        unsafe {
            std::env::set_var(MAX_WIDTH_ENV, "0");
        }
        assert!(matches!(DiagramConfig::from_env(), Err(ConfigError::Invalid(_))));
        assert!(matches!(
            DiagramConfig::load(Some(file.path())),
            Err(ConfigError::Invalid(_))
        ));

        // SAFETY: as above
        unsafe {
            std::env::remove_var(MAX_WIDTH_ENV);
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let config = DiagramConfig::default().with_max_width(64);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"max_width":64}"#);
        let parsed: DiagramConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
