//! nvidia-settings backend implementation.

use crate::backend::{errors::BackendError, traits::DisplayBackend};
use crate::display::DisplayCommand;
use crate::monitors::{MonitorSet, select_primary};

const METAMODES_SEPARATOR: &str = ", ";

/// Replace the x offset of a metamode (`NAME: MODE +X+Y {...}`) with `x`.
///
/// A metamode without an offset gets `+X+0` appended to its mode.
fn with_x_offset(metamode: &str, x: i32) -> String {
    let mut parts: Vec<&str> = metamode.split('+').collect();
    if parts.len() < 2 {
        return format!("{} +{}+0", metamode.trim_end(), x);
    }
    let x = x.to_string();
    parts[1] = &x;
    parts.join("+")
}

/// Backend implementation for `nvidia-settings`.
///
/// Assigns `CurrentMetaMode` from the xorg.conf metamodes of the enabled
/// monitors, with their x offsets rewritten to the new layout, and sets
/// `XineramaInfoOrder` so the primary monitor comes first.
pub struct NvidiaBackend;

impl DisplayBackend for NvidiaBackend {
    fn name(&self) -> &'static str {
        "nvidia"
    }

    fn display_name(&self) -> &'static str {
        "NVIDIA X Server Settings"
    }

    fn program(&self) -> &'static str {
        "nvidia-settings"
    }

    fn uses_metamodes(&self) -> bool {
        true
    }

    fn build_command(&self, monitors: &MonitorSet) -> Result<DisplayCommand, BackendError> {
        let primary = select_primary(monitors).ok_or(BackendError::NoEnabledMonitors)?;

        let metamodes = monitors
            .enabled()
            .map(|monitor| {
                monitor
                    .metamodes
                    .as_deref()
                    .map(|m| with_x_offset(m, monitor.x))
                    .ok_or_else(|| BackendError::MissingMetamodes {
                        name: monitor.name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DisplayCommand::new(self.program())
            .arg("--assign")
            .arg(format!(
                "CurrentMetaMode={}",
                metamodes.join(METAMODES_SEPARATOR)
            ))
            .arg("--assign")
            .arg(format!("XineramaInfoOrder={}", primary.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitors::{Action, Monitor, apply_action, repack_positions};

    fn monitor(name: &str, x: i32, enabled: bool, metamodes: Option<&str>) -> Monitor {
        Monitor {
            index: 0,
            name: name.to_string(),
            x,
            y: 0,
            width: 1920,
            height: 1080,
            mode: None,
            rate: Some(60.0),
            enabled,
            metamodes: metamodes.map(str::to_string),
        }
    }

    #[test]
    fn test_with_x_offset() {
        assert_eq!(
            with_x_offset("DP-0: 1920x1080_144 +1920+0", 0),
            "DP-0: 1920x1080_144 +0+0"
        );
        assert_eq!(
            with_x_offset("HDMI-0: nvidia-auto-select +0+0 {ForceCompositionPipeline=On}", 2560),
            "HDMI-0: nvidia-auto-select +2560+0 {ForceCompositionPipeline=On}"
        );
        assert_eq!(
            with_x_offset("DP-0: nvidia-auto-select", 1920),
            "DP-0: nvidia-auto-select +1920+0"
        );
    }

    #[test]
    fn test_build_command() {
        let mut monitors = MonitorSet::new(
            vec![
                monitor("DP-0", 0, true, Some("DP-0: 1920x1080_144 +0+0")),
                monitor("DP-2", 1920, true, Some("DP-2: 1920x1080_60 +1920+0")),
                monitor("HDMI-0", 3840, true, Some("HDMI-0: 1920x1080_60 +3840+0")),
            ],
            Some("DP-0".to_string()),
        );
        apply_action(&mut monitors, Action::Disable(1)).unwrap();
        repack_positions(&mut monitors);

        let command = NvidiaBackend.build_command(&monitors).unwrap();
        assert_eq!(command.program(), "nvidia-settings");
        assert_eq!(
            command.get_args(),
            [
                "--assign",
                "CurrentMetaMode=DP-2: 1920x1080_60 +0+0, HDMI-0: 1920x1080_60 +1920+0",
                "--assign",
                "XineramaInfoOrder=DP-2",
            ]
        );
    }

    #[test]
    fn test_disabled_monitor_needs_no_metamodes() {
        let monitors = MonitorSet::new(
            vec![
                monitor("DP-0", 0, true, Some("DP-0: 1920x1080 +0+0")),
                monitor("HDMI-0", 1920, false, None),
            ],
            None,
        );
        assert!(NvidiaBackend.build_command(&monitors).is_ok());
    }

    #[test]
    fn test_missing_metamodes_is_error() {
        let monitors = MonitorSet::new(
            vec![
                monitor("DP-0", 0, true, Some("DP-0: 1920x1080 +0+0")),
                monitor("HDMI-0", 1920, true, None),
            ],
            None,
        );
        assert!(matches!(
            NvidiaBackend.build_command(&monitors),
            Err(BackendError::MissingMetamodes { ref name }) if name == "HDMI-0"
        ));
    }

    #[test]
    fn test_backend_properties() {
        assert_eq!(NvidiaBackend.name(), "nvidia");
        assert_eq!(NvidiaBackend.program(), "nvidia-settings");
        assert!(NvidiaBackend.uses_metamodes());
    }
}
