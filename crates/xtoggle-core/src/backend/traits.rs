//! Display backend trait definition.

use crate::backend::errors::BackendError;
use crate::display::DisplayCommand;
use crate::monitors::MonitorSet;

/// Trait defining the interface for display backends.
///
/// Each supported tool (xrandr, nvidia-settings) implements this trait to
/// turn the desired monitor state into the single command that applies it.
pub trait DisplayBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "xrandr", "nvidia").
    fn name(&self) -> &'static str;

    /// The display name for this backend (e.g., "XRandR").
    fn display_name(&self) -> &'static str;

    /// The executable this backend runs.
    fn program(&self) -> &'static str;

    /// Whether the backend needs the NVIDIA metamodes from xorg.conf.
    fn uses_metamodes(&self) -> bool {
        false
    }

    /// Build the command that applies the enabled flags and positions of `monitors`.
    ///
    /// # Errors
    /// * `BackendError::NoEnabledMonitors` - every monitor is off
    /// * `BackendError::MissingMetamodes` - an enabled monitor lacks data the backend needs
    fn build_command(&self, monitors: &MonitorSet) -> Result<DisplayCommand, BackendError>;
}
