use clap::ArgMatches;
use tracing::error;

use xtoggle_core::Action;
use xtoggle_core::events;

mod completions;
mod toggle;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        Some((verb, sub_matches)) => {
            let target = sub_matches
                .try_get_one::<usize>("target")
                .ok()
                .flatten()
                .copied();
            let action = Action::from_verb(verb, target).ok_or_else(|| {
                error!(event = "cli.command_unknown", verb = verb);
                format!("Unknown command '{}'", verb)
            })?;
            toggle::handle_toggle_command(matches, Some(action))
        }
        None if matches.get_flag("status") => toggle::handle_toggle_command(matches, None),
        None => {
            error!(event = "cli.command_missing");
            Err("No command given. Run 'xtoggle --help' for usage.".into())
        }
    }
}
