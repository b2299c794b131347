//! Interactive dialogs drawn with ratatui on top of crossterm.
//!
//! The menu controller talks to dialogs only through [`MenuFrontend`], so the
//! whole read-select-dispatch loop can be driven by a scripted fake in tests.

mod errors;
mod layout;
mod menu_dialog;
mod message_box;
mod terminal;
pub mod theme;

pub use errors::UIError;
pub use theme::Palette;

use crate::log_debug;
use menu_dialog::MenuDialog;
use message_box::MessageBox;

/// One selectable row: the tag returned on selection and the text shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub tag: String,
    pub label: String,
}

impl MenuItem {
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
        }
    }
}

pub trait MenuFrontend {
    /// Show a single-select list. Returns the chosen tag, or `None` when the
    /// user cancels.
    fn menu(&mut self, title: &str, prompt: &str, items: &[MenuItem]) -> Result<Option<String>, UIError>;

    /// Show `message` until the user acknowledges it. `size` is an optional
    /// `(height, width)`.
    fn message_box(&mut self, title: &str, message: &str, size: Option<(u16, u16)>) -> Result<(), UIError>;
}

/// Full-screen dialogs on the controlling terminal.
pub struct Dialogs {
    palette: Palette,
    no_cancel: bool,
}

impl Dialogs {
    pub fn new(palette: Palette, no_cancel: bool) -> Self {
        log_debug!("Dialogs using palette '{}' (no_cancel: {})", palette.name, no_cancel);
        Self { palette, no_cancel }
    }
}

impl MenuFrontend for Dialogs {
    fn menu(&mut self, title: &str, prompt: &str, items: &[MenuItem]) -> Result<Option<String>, UIError> {
        let mut dialog = MenuDialog::new(title, prompt, items, !self.no_cancel);
        let choice = terminal::run_dialog(&mut dialog, &self.palette)?;
        log_debug!("Menu returned: {:?}", choice);
        Ok(choice)
    }

    fn message_box(&mut self, title: &str, message: &str, size: Option<(u16, u16)>) -> Result<(), UIError> {
        let mut dialog = MessageBox::new(title, message, size);
        terminal::run_dialog(&mut dialog, &self.palette)
    }
}
