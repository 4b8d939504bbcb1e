//! Configuration type definitions for the xtoggle CLI.
//!
//! These types are serialized/deserialized from the TOML config file.
//!
//! # Example Configuration
//!
//! ```toml
//! [backend]
//! default = "xrandr"
//!
//! [paths]
//! layout_file = "/home/me/.config/monitors.xml"
//! xorg_conf = "/etc/X11/xorg.conf"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from `~/.xtoggle/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct XToggleConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Locations of the files the layout is read from
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend used to apply changes when `--nvidia` is not given.
    /// Must be one of: xrandr, nvidia.
    #[serde(default = "super::defaults::default_backend")]
    pub default: String,
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    /// Display layout written by the desktop's display settings.
    /// Default: `~/.config/monitors.xml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<PathBuf>,

    /// X server configuration holding the NVIDIA `metamodes` option.
    /// Default: `/etc/X11/xorg.conf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xorg_conf: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = XToggleConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: XToggleConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.backend.default, parsed.backend.default);
        assert!(parsed.paths.layout_file.is_none());
    }

    #[test]
    fn test_paths_deserialize() {
        let toml_str = r#"
layout_file = "/tmp/monitors.xml"
xorg_conf = "/tmp/xorg.conf"
"#;
        let paths: PathsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(paths.layout_file, Some(PathBuf::from("/tmp/monitors.xml")));
        assert_eq!(paths.xorg_conf, Some(PathBuf::from("/tmp/xorg.conf")));
    }
}
