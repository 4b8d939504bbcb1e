//! Default implementations for configuration types.
//!
//! This module contains `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::backend::BackendType;
use crate::config::types::BackendConfig;
use std::path::PathBuf;

/// Location of the NVIDIA driver's X server configuration.
pub const DEFAULT_XORG_CONF: &str = "/etc/X11/xorg.conf";

/// Returns the default backend name.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_backend() -> String {
    BackendType::Xrandr.to_string()
}

/// Returns `~/.config/monitors.xml`, or None if the home directory is unknown.
pub fn default_layout_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("monitors.xml"))
}

pub fn default_xorg_conf() -> PathBuf {
    PathBuf::from(DEFAULT_XORG_CONF)
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            default: default_backend(),
        }
    }
}
