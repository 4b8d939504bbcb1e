//! Configuration validation logic.

use crate::backend::BackendType;
use crate::config::types::XToggleConfig;
use crate::errors::ConfigError;

/// Valid backend names.
pub const VALID_BACKENDS: [&str; 2] = ["xrandr", "nvidia"];

/// Validate an XToggleConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Backend name must be a known backend (xrandr, nvidia)
/// - Configured paths must not be empty
pub fn validate_config(config: &XToggleConfig) -> Result<(), ConfigError> {
    if BackendType::parse(&config.backend.default).is_none() {
        return Err(ConfigError::InvalidBackend {
            backend: config.backend.default.clone(),
        });
    }

    let paths = [
        ("layout_file", config.paths.layout_file.as_ref()),
        ("xorg_conf", config.paths.xorg_conf.as_ref()),
    ];
    for (name, path) in paths {
        if let Some(path) = path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("paths.{} must not be empty", name),
            });
        }
    }

    Ok(())
}
