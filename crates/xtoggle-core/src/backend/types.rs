use serde::{Deserialize, Serialize};

/// Which tool applies the new monitor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    #[default]
    Xrandr,
    /// nvidia-settings, driven by the metamodes in xorg.conf
    Nvidia,
}

impl BackendType {
    /// Parse a backend name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "xrandr" => Some(BackendType::Xrandr),
            "nvidia" | "nvidia-settings" => Some(BackendType::Nvidia),
            _ => None,
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendType::Xrandr => write!(f, "xrandr"),
            BackendType::Nvidia => write!(f, "nvidia"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_type_display() {
        assert_eq!(BackendType::Xrandr.to_string(), "xrandr");
        assert_eq!(BackendType::Nvidia.to_string(), "nvidia");
    }

    #[test]
    fn test_backend_type_parse() {
        assert_eq!(BackendType::parse("xrandr"), Some(BackendType::Xrandr));
        assert_eq!(BackendType::parse("NVIDIA"), Some(BackendType::Nvidia));
        assert_eq!(
            BackendType::parse("nvidia-settings"),
            Some(BackendType::Nvidia)
        );
        assert_eq!(BackendType::parse("wayland"), None);
    }

    #[test]
    fn test_default_is_xrandr() {
        assert_eq!(BackendType::default(), BackendType::Xrandr);
    }
}
