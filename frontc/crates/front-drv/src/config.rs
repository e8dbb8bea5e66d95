//! Configuration for the front driver.
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags:
//!
//! ```toml
//! [scanner]
//! lexeme_capacity = 99
//! unrecognized = "emit"
//!
//! [output]
//! format = "legacy"
//! ```

use dirs::{config_dir, home_dir};
use front_lex::{ScannerConfig, UnrecognizedPolicy, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};
use crate::output::OutputFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "front.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerSection,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[scanner]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerSection {
    /// Maximum characters kept per lexeme.
    #[serde(default = "default_lexeme_capacity")]
    pub lexeme_capacity: usize,

    /// Handling of characters outside the operator set.
    #[serde(default)]
    pub unrecognized: UnrecognizedPolicy,
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputSection {
    /// Token line format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_lexeme_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self {
            lexeme_capacity: default_lexeme_capacity(),
            unrecognized: UnrecognizedPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/front`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| DriverError::Config(format!("failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the scanner cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.scanner.lexeme_capacity == 0 {
            return Err(DriverError::Config(
                "lexeme_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Scanner settings derived from this configuration.
    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig {
            lexeme_capacity: self.scanner.lexeme_capacity,
            unrecognized: self.scanner.unrecognized,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("front").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("front").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
