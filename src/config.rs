//! Configuration management module
//!
//! Provides:
//! - Optional YAML settings file loading ([`ConfigLoader`])
//! - Resolution of CLI flags, environment and settings into a [`MenuConfig`]
//!
//! Precedence, highest first: command-line flags, the `SSHMENU_THEME`
//! environment variable (theme only), the settings file, built-in defaults.

mod errors;
mod loader;
mod settings;

pub use errors::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ColorPair, DEFAULT_CONNECT_PROGRAM, DEFAULT_PACING_DELAY_MS, DEFAULT_PROMPT, DEFAULT_THEME, DEFAULT_TITLE, PaletteSpec, Settings,
};

use crate::args::MainArgs;
use crate::log_warn;
use crate::ssh_config::{expand_tilde, get_default_ssh_config_path};
use std::{collections::BTreeMap, env, path::PathBuf, time::Duration};

/// Environment variable naming the palette used by the menu renderer.
pub const THEME_ENV_VAR: &str = "SSHMENU_THEME";

const APP_DIR_NAME: &str = ".ssh-menu";

/// Per-user directory for the settings file and logs (`~/.ssh-menu`).
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR_NAME))
}

/// Theme requested through [`THEME_ENV_VAR`], if set and non-empty.
pub fn theme_from_env() -> Option<String> {
    env::var(THEME_ENV_VAR).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Everything the menu needs for one run, after all sources are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    pub ssh_config_path: PathBuf,
    pub connect_program: String,
    pub theme: String,
    pub title: String,
    pub prompt: String,
    pub pacing_delay: Duration,
    pub no_cancel: bool,
    pub debug: bool,
    pub palettes: BTreeMap<String, PaletteSpec>,
}

impl MenuConfig {
    pub fn resolve(args: &MainArgs, settings: Settings, env_theme: Option<String>) -> Self {
        let ssh_config_path = args
            .ssh_config
            .clone()
            .or_else(|| settings.ssh_config.as_deref().map(|path| PathBuf::from(expand_tilde(path))))
            .or_else(get_default_ssh_config_path)
            .unwrap_or_else(|| PathBuf::from(".ssh").join("config"));

        let connect_program = if settings.connect_program.trim().is_empty() {
            log_warn!("Empty connect_program in settings, using '{}'", DEFAULT_CONNECT_PROGRAM);
            DEFAULT_CONNECT_PROGRAM.to_string()
        } else {
            settings.connect_program.trim().to_string()
        };

        let theme = args.theme.clone().or(env_theme).unwrap_or(settings.theme);

        Self {
            ssh_config_path,
            connect_program,
            theme,
            title: settings.title,
            prompt: settings.prompt,
            pacing_delay: Duration::from_millis(settings.pacing_delay_ms),
            no_cancel: settings.no_cancel,
            debug: args.debug || settings.debug_mode,
            palettes: settings.palettes,
        }
    }
}

#[cfg(test)]
#[path = "test/config.rs"]
mod tests;
