use clap::{Arg, ArgMatches, Command, value_parser};
use std::{ffi::OsString, path::PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainArgs {
    pub debug: bool,
    pub ssh_config: Option<PathBuf>,
    pub theme: Option<String>,
    pub settings: Option<PathBuf>,
}

pub fn build_cli_command() -> Command {
    Command::new("sshmenu")
        .version(env!("CARGO_PKG_VERSION"))
        .author("@karsyboy")
        .about("Pick a host from your SSH config and connect to it.")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging to ~/.ssh-menu/logs/sshmenu.log")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ssh_config")
                .short('c')
                .long("ssh-config")
                .value_name("PATH")
                .help("SSH client config to read hosts from (default: ~/.ssh/config)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("NAME")
                .help("Color palette: main, red, brown or a palette from the settings file"),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .value_name("PATH")
                .help("Settings file to use instead of ~/.ssh-menu/config.yaml")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn main_args_from_matches(matches: &ArgMatches) -> MainArgs {
    MainArgs {
        debug: matches.get_flag("debug"),
        ssh_config: matches.get_one::<PathBuf>("ssh_config").cloned(),
        theme: matches.get_one::<String>("theme").cloned(),
        settings: matches.get_one::<PathBuf>("settings").cloned(),
    }
}

pub(crate) fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> Result<MainArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().try_get_matches_from(args)?;
    Ok(main_args_from_matches(&matches))
}

/// Parses command-line arguments using clap, exiting with usage on error.
pub fn main_args() -> MainArgs {
    let matches = build_cli_command().get_matches();
    main_args_from_matches(&matches)
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
