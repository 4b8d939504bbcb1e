//! xrandr backend implementation.

use crate::backend::{errors::BackendError, traits::DisplayBackend};
use crate::display::DisplayCommand;
use crate::monitors::{MonitorSet, select_primary};

/// Backend implementation for `xrandr`.
///
/// Every connected output is listed: enabled ones get an explicit mode,
/// rate and position, disabled ones `--off`.
pub struct XrandrBackend;

impl DisplayBackend for XrandrBackend {
    fn name(&self) -> &'static str {
        "xrandr"
    }

    fn display_name(&self) -> &'static str {
        "XRandR"
    }

    fn program(&self) -> &'static str {
        "xrandr"
    }

    fn build_command(&self, monitors: &MonitorSet) -> Result<DisplayCommand, BackendError> {
        let primary = select_primary(monitors).ok_or(BackendError::NoEnabledMonitors)?;

        let mut command = DisplayCommand::new(self.program());
        for monitor in monitors {
            command = command.args(["--output", monitor.name.as_str()]);
            if !monitor.enabled {
                command = command.arg("--off");
                continue;
            }

            let (mode_width, mode_height) = monitor.mode_size();
            command = command
                .arg("--mode")
                .arg(format!("{}x{}", mode_width, mode_height));
            if let Some(rate) = monitor.rate {
                command = command.arg("--rate").arg(format!("{:.2}", rate));
            }
            command = command
                .arg("--pos")
                .arg(format!("{}x{}", monitor.x, monitor.y));
            if monitor.name == primary.name {
                command = command.arg("--primary");
            }
        }

        Ok(command)
    }
}
