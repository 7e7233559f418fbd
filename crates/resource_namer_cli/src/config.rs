//! Configuration management for the resource-namer CLI.
//!
//! A configuration file lets a project pin its base name, default length
//! budget and normalization policy once instead of repeating them on every
//! invocation. The configuration is stored in TOML format and is loaded from
//! an explicit path or from `resource-namer.toml` in the current directory.
//! Command-line flags always take precedence over file values.

use std::{
    fs,
    path::{Path, PathBuf},
};

use resource_namer::{NamerOptions, MAX_RESOURCE_NAME_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "resource-namer.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the resource-namer CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// base_name = "fullstack"
/// default_max_length = 63
///
/// [options]
/// normalize = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base name used when `--base` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,

    /// Length budget used when `--max-length` is not given.
    #[serde(default = "AppConfig::default_max_length")]
    pub default_max_length: usize,

    /// Options passed to the name composer.
    #[serde(default)]
    pub options: NamerOptions,
}

impl AppConfig {
    fn default_max_length() -> usize {
        MAX_RESOURCE_NAME_LENGTH
    }

    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or
    /// does not contain a valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration a command should run with.
    ///
    /// An explicitly requested file must exist. When no path is given the
    /// default file is used if present, otherwise built-in defaults apply.
    pub fn resolve(config_path: Option<&str>) -> Result<Self, Error> {
        let path = get_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Creates parent directories if they don't exist and overwrites any
    /// existing file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_name: None,
            default_max_length: AppConfig::default_max_length(),
            options: NamerOptions::default(),
        }
    }
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./resource-namer.toml` in the current directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
