use sshmenu::{
    Result,
    args::{self, MainArgs},
    config::{self, ConfigError, ConfigLoader, MenuConfig, Settings},
    connect::Launcher,
    log::LOGGER,
    log_debug, log_error, log_info, log_warn,
    menu::{MenuController, MenuOptions},
    ssh_config::SshConfigFile,
    ui::{Dialogs, MenuFrontend, Palette},
};

use std::process::ExitCode;

const SETTINGS_WARNING_TITLE: &str = "Settings";

/// Merge flags, environment and the settings file.
///
/// A missing or broken settings file never stops the menu: defaults are used
/// and the error is handed back so it can be shown.
fn load_config(args: &MainArgs) -> (MenuConfig, Option<ConfigError>) {
    let (settings, settings_error) = match ConfigLoader::new(args.settings.clone()).load_settings() {
        Ok(settings) => (settings, None),
        Err(err) => {
            log_warn!("Ignoring settings file, using defaults: {}", err);
            (Settings::default(), Some(err))
        }
    };
    (MenuConfig::resolve(args, settings, config::theme_from_env()), settings_error)
}

fn run(config: &MenuConfig, settings_error: Option<ConfigError>) -> Result<()> {
    let palette = Palette::named(&config.theme, &config.palettes);
    let mut frontend = Dialogs::new(palette, config.no_cancel);

    if let Some(err) = settings_error {
        let message = format!("{}\n\nContinuing with default settings.", err);
        frontend.message_box(SETTINGS_WARNING_TITLE, &message, None)?;
    }

    let launcher = Launcher::new(config.connect_program.clone());
    let hosts = SshConfigFile::new(config.ssh_config_path.clone());

    log_debug!("Reading hosts from {:?}", hosts.path());
    let mut controller = MenuController::new(hosts, frontend, launcher, MenuOptions::from(config));
    controller.run()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = args::main_args();
    if args.debug {
        LOGGER.enable_debug();
    }

    let (config, settings_error) = load_config(&args);

    if config.debug {
        LOGGER.enable_debug();
        if let Err(err) = LOGGER.log_debug("Debug mode enabled") {
            eprintln!("❌ Failed to initialize debug logging: {}", err);
            return ExitCode::FAILURE;
        }
    }
    log_info!("ssh-menu {} starting (theme: {})", env!("CARGO_PKG_VERSION"), config.theme);

    // Only a terminal that cannot be driven gets here as an error.
    let result = run(&config, settings_error);
    if let Err(err) = &result {
        log_error!("Menu stopped: {}", err);
    }
    if let Err(err) = LOGGER.flush() {
        eprintln!("❌ Failed to flush debug log: {}", err);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "test/main.rs"]
mod tests;
