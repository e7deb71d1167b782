//! Loader configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Settings for one registry session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Dedicated server / headless run: resource checks and loads are skipped.
    pub headless: bool,

    /// Reject extension definitions whose name is empty or already taken.
    pub reject_duplicate_names: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            headless: false,
            reject_duplicate_names: true,
        }
    }
}

impl LoaderConfig {
    /// Configuration for a headless run.
    pub fn headless() -> Self {
        Self {
            headless: true,
            ..Self::default()
        }
    }

    /// Whether resource validation and loading run at all.
    pub fn validates_resources(&self) -> bool {
        !self.headless
    }

    /// Parse configuration from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert!(config.validates_resources());
        assert!(config.reject_duplicate_names);
        assert!(!LoaderConfig::headless().validates_resources());
    }

    #[test]
    fn test_partial_toml() {
        let config = LoaderConfig::from_toml_str("headless = true").unwrap();
        assert!(config.headless);
        assert!(config.reject_duplicate_names);
    }

    #[test]
    fn test_bad_toml() {
        let result = LoaderConfig::from_toml_str("headless = \"maybe\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = LoaderConfig::load(Path::new("/nonexistent/loader.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
