//! Configuration management and validation.
//!
//! Provides configuration structures for the course file location, header
//! handling, lookup normalization, and logging, with layered precedence:
//! built-in defaults, then an optional TOML config file, then CLI overrides
//! applied by the command layer.

use crate::app::services::catalog::HeaderPolicy;
use crate::constants::{APP_CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_COURSE_FILE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Course file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the course file used when none is given on the command line
    pub file: PathBuf,

    /// How to treat the first non-blank line of the file
    pub header_policy: HeaderPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_COURSE_FILE),
            header_policy: HeaderPolicy::default(),
        }
    }
}

/// Lookup behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Upper-case the queried course id before lookup
    ///
    /// The index itself is case-sensitive; this normalizes the query so that
    /// `csci300` finds `CSCI300`. Disable for byte-exact matching.
    pub normalize_case: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            normalize_case: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter ("error", "warn", "info", "debug", "trace")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Top-level configuration for the course catalog CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Course file settings
    pub catalog: CatalogConfig,

    /// Lookup behavior settings
    pub lookup: LookupConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with layered precedence: defaults, then the config
    /// file when one is present
    ///
    /// CLI overrides are applied afterwards by the command layer.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("could not determine user config directory"))
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.catalog.file.as_os_str().is_empty() {
            return Err(Error::configuration("course file path cannot be empty"));
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "invalid log level '{}', expected one of: {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.catalog.file, PathBuf::from(DEFAULT_COURSE_FILE));
        assert_eq!(config.catalog.header_policy, HeaderPolicy::Auto);
        assert!(config.lookup.normalize_case);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[catalog]
file = "advising/fall.csv"
header_policy = "skip"

[lookup]
normalize_case = false

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.catalog.file, PathBuf::from("advising/fall.csv"));
        assert_eq!(config.catalog.header_policy, HeaderPolicy::Skip);
        assert!(!config.lookup.normalize_case);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[logging]\nlevel = \"info\"\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.catalog.file, PathBuf::from(DEFAULT_COURSE_FILE));
        assert!(config.lookup.normalize_case);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "not valid toml [[[").unwrap();

        let result = Config::from_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_layered_without_file_is_default() {
        let config = Config::load_layered(None).unwrap();
        assert_eq!(config.catalog.file, PathBuf::from(DEFAULT_COURSE_FILE));
    }
}
