//! Host menu: list construction and the interaction loop.

mod controller;
mod entry;

pub use controller::{
    CONNECT_FAILED_TITLE, GOODBYE_MESSAGE, GOODBYE_TITLE, INVALID_MESSAGE, INVALID_TITLE, MenuController, MenuOptions,
};
pub use entry::{MIDDLE_GLYPH, MenuAction, MenuEntry, MenuList, QUIT_LABEL, TERMINATOR_GLYPH, TOP_GLYPH};

use crate::config::MenuConfig;

impl From<&MenuConfig> for MenuOptions {
    fn from(config: &MenuConfig) -> Self {
        Self {
            title: config.title.clone(),
            prompt: config.prompt.clone(),
            pacing_delay: config.pacing_delay,
        }
    }
}
