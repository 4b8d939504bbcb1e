use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

fn target_arg() -> Arg {
    Arg::new("target")
        .help("Monitor position, counting from 1 at the leftmost monitor")
        .required(true)
        .index(1)
        .value_parser(value_parser!(usize))
}

pub fn build_cli() -> Command {
    Command::new("xtoggle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Toggle X11 monitors on and off")
        .long_about("xtoggle turns monitors on and off by their left-to-right position. Disabled monitors are restored to the resolution and refresh rate saved in ~/.config/monitors.xml, and the remaining monitors are packed from the left without gaps.")
        .arg(
            Arg::new("nvidia")
                .short('n')
                .long("nvidia")
                .help("Apply changes with nvidia-settings instead of xrandr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print the command used to apply changes and enable logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("norun")
                .long("norun")
                .help("Print the command but do not run it")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("status")
                .short('s')
                .long("status")
                .help("Print the status of every connected monitor")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg_required_else_help(true)
        .subcommand(
            Command::new("toggle")
                .about("Flip a monitor on or off")
                .arg(target_arg()),
        )
        .subcommand(
            Command::new("enable")
                .about("Turn a monitor on")
                .arg(target_arg()),
        )
        .subcommand(
            Command::new("disable")
                .about("Turn a monitor off")
                .arg(target_arg()),
        )
        .subcommand(
            Command::new("enable-only")
                .about("Turn a monitor on and every other monitor off")
                .arg(target_arg()),
        )
        .subcommand(
            Command::new("toggle-only")
                .about("Switch between only this monitor and all monitors")
                .arg(target_arg()),
        )
        .subcommand(Command::new("enable-all").about("Turn every connected monitor on"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}
