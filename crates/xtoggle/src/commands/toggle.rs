use clap::ArgMatches;
use tracing::{error, info, warn};

use xtoggle_core::events;
use xtoggle_core::{
    Action, BackendType, ToggleRequest, X11DisplayServer, XToggleConfig, get_backend, toggle_ops,
};

fn load_config_with_warning() -> XToggleConfig {
    match XToggleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.xtoggle/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            XToggleConfig::default()
        }
    }
}

fn resolve_backend_type(
    matches: &ArgMatches,
    config: &XToggleConfig,
) -> Result<BackendType, Box<dyn std::error::Error>> {
    if matches.get_flag("nvidia") {
        return Ok(BackendType::Nvidia);
    }
    config.backend_type().map_err(|e| {
        eprintln!("❌ {}", e);
        error!(event = "cli.backend_invalid", error = %e);
        events::log_app_error(&e);
        e.into()
    })
}

pub(crate) fn handle_toggle_command(
    matches: &ArgMatches,
    action: Option<Action>,
) -> Result<(), Box<dyn std::error::Error>> {
    let verbose = matches.get_flag("verbose");
    let norun = matches.get_flag("norun");
    let show_status = matches.get_flag("status");

    let config = load_config_with_warning();
    let backend_type = resolve_backend_type(matches, &config)?;
    let backend = get_backend(backend_type)
        .ok_or_else(|| format!("No backend registered for '{}'", backend_type))?;

    info!(
        event = "cli.toggle_started",
        action = ?action,
        backend = backend.name(),
        norun = norun
    );

    let request = ToggleRequest::new(action, config.layout_file_path(), config.xorg_conf_path())
        .dry_run(norun);

    match toggle_ops::run_toggle(&request, backend, &X11DisplayServer) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("⚠️  {}", warning);
            }

            if let Some(command) = &outcome.command
                && (verbose || norun)
            {
                println!("{}", command);
            }

            if outcome.applied
                && verbose
                && let Some(action) = action
            {
                println!("✅ Applied '{}' with {}", action, backend.display_name());
            }

            if show_status {
                for monitor in &outcome.monitors {
                    println!("{}", monitor);
                }
            }

            info!(
                event = "cli.toggle_completed",
                applied = outcome.applied,
                enabled_count = outcome.monitors.enabled_count()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.toggle_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
