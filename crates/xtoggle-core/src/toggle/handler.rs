use tracing::{error, info, warn};

use crate::backend::DisplayBackend;
use crate::display::DisplayServer;
use crate::layout::{DisplayLayout, Metamodes};
use crate::monitors::{apply_action, repack_positions, resolve_monitors};
use crate::toggle::{errors::ToggleError, types::*};

const QUERY_PROGRAM: &str = "xrandr";

/// Resolve the connected monitors and, when the request carries an action,
/// apply it through `backend`.
///
/// Every check (session, tools, layout, metamodes, target index, remaining enabled
/// monitors) happens before the command is built, so a failed run never
/// touches the display. With `dry_run` the command is built but not executed.
pub fn run_toggle(
    request: &ToggleRequest,
    backend: &dyn DisplayBackend,
    server: &dyn DisplayServer,
) -> Result<ToggleOutcome, ToggleError> {
    info!(
        event = "core.toggle.run_started",
        action = ?request.action,
        backend = backend.name(),
        dry_run = request.dry_run
    );

    // 1. Session and tools
    server.ensure_x11_session()?;
    server.ensure_available(QUERY_PROGRAM)?;
    if backend.program() != QUERY_PROGRAM {
        server.ensure_available(backend.program())?;
    }

    // 2. Connected outputs
    let outputs = server.query_outputs()?;

    // 3. Saved layout
    let mut warnings = Vec::new();
    let layout = match &request.layout_file {
        Some(path) => {
            let layout = DisplayLayout::load(path)?;
            if layout.is_none() {
                warn!(
                    event = "core.toggle.layout_missing",
                    path = %path.display()
                );
                warnings.push(format!(
                    "Layout file {} not found, using the current xrandr geometry",
                    path.display()
                ));
            }
            layout
        }
        None => {
            warn!(event = "core.toggle.layout_path_unknown");
            warnings.push(
                "Could not determine the layout file location, using the current xrandr geometry"
                    .to_string(),
            );
            None
        }
    };

    // 4. Metamodes for backends that need them
    let metamodes = if backend.uses_metamodes() {
        let connected: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
        Some(Metamodes::load(&request.xorg_conf, &connected)?)
    } else {
        None
    };

    let mut monitors = resolve_monitors(&outputs, layout.as_ref(), metamodes.as_ref())?;
    info!(
        event = "core.toggle.monitors_resolved",
        monitor_count = monitors.len(),
        enabled_count = monitors.enabled_count(),
        primary = ?monitors.original_primary()
    );

    let Some(action) = request.action else {
        info!(event = "core.toggle.status_only");
        return Ok(ToggleOutcome {
            monitors,
            command: None,
            applied: false,
            warnings,
        });
    };

    apply_action(&mut monitors, action)?;
    repack_positions(&mut monitors);

    if monitors.original_primary().is_none() {
        warn!(event = "core.toggle.primary_unknown");
        warnings.push(
            "No primary monitor found, the first enabled monitor becomes primary".to_string(),
        );
    }

    let command = backend.build_command(&monitors)?;

    if request.dry_run {
        info!(
            event = "core.toggle.dry_run",
            command = %command
        );
        return Ok(ToggleOutcome {
            monitors,
            command: Some(command),
            applied: false,
            warnings,
        });
    }

    if let Err(e) = server.execute(&command) {
        error!(
            event = "core.toggle.apply_failed",
            command = %command,
            error = %e
        );
        return Err(e.into());
    }

    info!(
        event = "core.toggle.run_completed",
        action = %action,
        enabled_count = monitors.enabled_count()
    );

    Ok(ToggleOutcome {
        monitors,
        command: Some(command),
        applied: true,
        warnings,
    })
}
