//! Pure state transitions on a [`MonitorSet`].

use tracing::debug;

use super::errors::MonitorError;
use super::types::{Action, Monitor, MonitorSet};

/// Apply `action` to the enabled flags of `monitors`.
///
/// The target index is validated before anything changes. Fails with
/// `NoEnabledMonitors` if the result would leave every monitor off; the set
/// must then be discarded since it no longer matches a valid layout.
pub fn apply_action(monitors: &mut MonitorSet, action: Action) -> Result<(), MonitorError> {
    if let Some(target) = action.target() {
        monitors.check_index(target)?;
    }

    match action {
        Action::Toggle(i) => {
            let monitor = &mut monitors.monitors_mut()[i - 1];
            monitor.enabled = !monitor.enabled;
        }
        Action::Enable(i) => monitors.monitors_mut()[i - 1].enabled = true,
        Action::Disable(i) => monitors.monitors_mut()[i - 1].enabled = false,
        Action::EnableOnly(i) => enable_only(monitors, i),
        Action::ToggleOnly(i) => {
            if is_sole_enabled(monitors, i) {
                enable_all(monitors);
            } else {
                enable_only(monitors, i);
            }
        }
        Action::EnableAll => enable_all(monitors),
    }

    debug!(
        event = "core.monitors.action_applied",
        action = %action,
        enabled_count = monitors.enabled_count()
    );

    if monitors.enabled_count() == 0 {
        return Err(MonitorError::NoEnabledMonitors);
    }

    Ok(())
}

/// True if monitor `index` is enabled and no other monitor is.
fn is_sole_enabled(monitors: &MonitorSet, index: usize) -> bool {
    let mut enabled = monitors.enabled();
    matches!(
        (enabled.next(), enabled.next()),
        (Some(only), None) if only.index == index
    )
}

fn enable_only(monitors: &mut MonitorSet, index: usize) {
    for monitor in monitors.monitors_mut() {
        monitor.enabled = monitor.index == index;
    }
}

fn enable_all(monitors: &mut MonitorSet) {
    for monitor in monitors.monitors_mut() {
        monitor.enabled = true;
    }
}

/// Lay enabled monitors out left to right in index order with no gaps.
///
/// Each enabled monitor's x becomes the total width of the enabled monitors
/// before it; y is kept. Disabled monitors are left untouched.
pub fn repack_positions(monitors: &mut MonitorSet) {
    let mut total_width: i32 = 0;
    for monitor in monitors.monitors_mut().iter_mut().filter(|m| m.enabled) {
        monitor.x = total_width;
        total_width = total_width.saturating_add(i32::try_from(monitor.width).unwrap_or(i32::MAX));
    }
}

/// The monitor that should be primary after the change.
///
/// Keeps the original primary while it stays enabled, otherwise falls back to
/// the first enabled monitor.
pub fn select_primary(monitors: &MonitorSet) -> Option<&Monitor> {
    monitors
        .original_primary()
        .and_then(|name| monitors.by_name(name))
        .filter(|m| m.enabled)
        .or_else(|| monitors.enabled().next())
}
