//! # Configuration System
//!
//! Optional TOML configuration for the xtoggle CLI.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is resolved in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - xrandr backend, `~/.config/monitors.xml`, `/etc/X11/xorg.conf`
//! 2. **User config** - `~/.xtoggle/config.toml`
//! 3. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.xtoggle/config.toml
//! [backend]
//! default = "nvidia"
//!
//! [paths]
//! layout_file = "/home/me/.config/monitors.xml"
//! xorg_conf = "/etc/X11/xorg.conf.d/20-nvidia.conf"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use xtoggle_core::config::XToggleConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = XToggleConfig::load()?;
//!     let backend = config.backend_type()?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{BackendConfig, PathsConfig, XToggleConfig};
pub use validation::{VALID_BACKENDS, validate_config};

use crate::backend::BackendType;
use crate::errors::ConfigError;
use std::path::PathBuf;

impl XToggleConfig {
    /// Load configuration from the user config file.
    ///
    /// See [`loading::load`] for details.
    pub fn load() -> Result<Self, ConfigError> {
        loading::load()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// The configured default backend.
    pub fn backend_type(&self) -> Result<BackendType, ConfigError> {
        BackendType::parse(&self.backend.default).ok_or_else(|| ConfigError::InvalidBackend {
            backend: self.backend.default.clone(),
        })
    }

    /// Path to the display-layout file, if one can be determined.
    ///
    /// Falls back to `~/.config/monitors.xml`. Returns None only when no
    /// path is configured and the home directory is unknown.
    pub fn layout_file_path(&self) -> Option<PathBuf> {
        self.paths
            .layout_file
            .clone()
            .or_else(defaults::default_layout_file)
    }

    /// Path to the X server configuration holding NVIDIA metamodes.
    pub fn xorg_conf_path(&self) -> PathBuf {
        self.paths
            .xorg_conf
            .clone()
            .unwrap_or_else(defaults::default_xorg_conf)
    }
}
