//! Configuration loading logic.
//!
//! A missing config file is not an error: defaults are used. A config file
//! that exists but cannot be parsed or fails validation is an error.

use crate::config::types::XToggleConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
}

/// Load configuration from `~/.xtoggle/config.toml`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if
/// validation fails. A missing file yields the default configuration.
pub fn load() -> Result<XToggleConfig, ConfigError> {
    let config = match user_config_path() {
        Some(path) => match load_config_file(&path) {
            Ok(config) => config,
            Err(e) if !is_file_not_found(&e) => return Err(e),
            Err(_) => XToggleConfig::default(),
        },
        None => XToggleConfig::default(),
    };

    validate_config(&config)?;

    Ok(config)
}

/// Path of the user config file, or None if the home directory is unknown.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".xtoggle").join("config.toml"))
}

/// Load a configuration file from the given path.
///
/// # Errors
/// * `ConfigError::IoError` - the file cannot be read
/// * `ConfigError::ConfigParseError` - the file is not valid TOML for this config
pub fn load_config_file(path: &Path) -> Result<XToggleConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}
