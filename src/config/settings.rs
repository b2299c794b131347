use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_CONNECT_PROGRAM: &str = "ssh";
pub const DEFAULT_THEME: &str = "main";
pub const DEFAULT_TITLE: &str = "SSH Menu";
pub const DEFAULT_PROMPT: &str = "Choose a host to connect to:";
pub const DEFAULT_PACING_DELAY_MS: u64 = 300;

/// Contents of the optional `~/.ssh-menu/config.yaml` settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub ssh_config: Option<String>, // Overrides ~/.ssh/config, `~` is expanded
    pub connect_program: String,    // Program run with the chosen alias as its only argument
    pub theme: String,              // Palette name, built-in or from `palettes`
    pub title: String,
    pub prompt: String,
    pub pacing_delay_ms: u64, // Pause after a connection returns, before the menu is redrawn
    pub no_cancel: bool,      // Hide the <Cancel> button
    pub debug_mode: bool,
    pub palettes: BTreeMap<String, PaletteSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ssh_config: None,
            connect_program: DEFAULT_CONNECT_PROGRAM.to_string(),
            theme: DEFAULT_THEME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
            no_cancel: true,
            debug_mode: false,
            palettes: BTreeMap::new(),
        }
    }
}

/// User palette: UI element name (`root`, `window`, `actlistbox`, ...) to colors.
pub type PaletteSpec = BTreeMap<String, ColorPair>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPair {
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
}
