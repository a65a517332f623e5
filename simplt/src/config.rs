//! Configuration module for the simplt CLI.
//!
//! This module handles locating and loading configuration
//! settings for the simplt application.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SimpltError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "simplt.toml";

/// Fallback worker count when the CPU count does not fit in a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,

    /// Tokenize-specific configuration.
    #[serde(default)]
    pub tokenize: TokenizeConfig,
}

/// Tokenize-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenizeConfig {
    /// Default output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Fail when any unrecognized character is found.
    #[serde(default)]
    pub strict: bool,
}

fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_parallel_jobs(),
            tokenize: TokenizeConfig::default(),
        }
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            strict: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/simplt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SimpltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            SimpltError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("simplt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("simplt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
