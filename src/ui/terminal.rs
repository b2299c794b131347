//! Terminal lifecycle for a single dialog.

use super::{UIError, theme::Palette};
use crate::{debug_enabled, log_debug};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, IsTerminal};

/// A modal screen that renders itself and consumes key presses until it
/// produces a result.
pub(crate) trait Dialog {
    type Output;

    fn render(&mut self, frame: &mut Frame, palette: &Palette);

    /// `Some` ends the dialog.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output>;
}

#[derive(Debug, Default)]
pub(crate) struct TerminalModeGuard {
    active: bool,
}

impl TerminalModeGuard {
    pub(crate) fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { active: true })
    }

    pub(crate) fn cleanup(&mut self) {
        if !self.active {
            return;
        }

        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        self.active = false;
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

pub(crate) fn is_cancel_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Show `dialog` on the real terminal and block until it finishes.
pub(crate) fn run_dialog<D: Dialog>(dialog: &mut D, palette: &Palette) -> Result<D::Output, UIError> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(UIError::NotATerminal);
    }

    let mut mode_guard = TerminalModeGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = drive_dialog(&mut terminal, dialog, palette, read_key);
    let show_cursor_result = terminal.show_cursor();

    mode_guard.cleanup();

    let output = result?;
    show_cursor_result?;
    Ok(output)
}

fn read_key() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        // Resizes and releases just trigger a redraw.
        _ => Ok(None),
    }
}

/// Render/read loop shared by the real terminal and tests.
pub(crate) fn drive_dialog<B, D, K>(terminal: &mut Terminal<B>, dialog: &mut D, palette: &Palette, mut next_key: K) -> Result<D::Output, UIError>
where
    B: Backend,
    D: Dialog,
    K: FnMut() -> io::Result<Option<KeyEvent>>,
{
    loop {
        terminal
            .draw(|frame| dialog.render(frame, palette))
            .map_err(|err| UIError::IoError(io::Error::other(err.to_string())))?;

        let Some(key) = next_key()? else {
            continue;
        };
        if debug_enabled!() {
            log_debug!("Dialog key: {:?} {:?}", key.code, key.modifiers);
        }
        if let Some(output) = dialog.handle_key(key) {
            return Ok(output);
        }
    }
}

#[cfg(test)]
#[path = "../test/ui/terminal.rs"]
mod tests;
