//! Blocking acknowledgement dialog.

use super::{
    layout::{centered_rect, display_width, max_line_width},
    terminal::{Dialog, is_cancel_chord},
    theme::{Palette, UiElement},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const MIN_WINDOW_WIDTH: u16 = 24;

pub(crate) struct MessageBox<'a> {
    title: &'a str,
    message: &'a str,
    /// Requested `(height, width)`, otherwise sized to the message.
    size: Option<(u16, u16)>,
}

impl<'a> MessageBox<'a> {
    pub(crate) fn new(title: &'a str, message: &'a str, size: Option<(u16, u16)>) -> Self {
        Self { title, message, size }
    }

    pub(crate) fn window_size(&self) -> (u16, u16) {
        if let Some((height, width)) = self.size {
            return (width.max(MIN_WINDOW_WIDTH), height.max(5));
        }

        let content_width = max_line_width(self.message).max(display_width(self.title).saturating_add(2));
        let width = content_width.saturating_add(4).max(MIN_WINDOW_WIDTH);
        let message_lines = u16::try_from(self.message.lines().count().max(1)).unwrap_or(u16::MAX);
        // Borders, spacer, button row.
        (width, message_lines.saturating_add(4))
    }
}

impl Dialog for MessageBox<'_> {
    type Output = ();

    fn render(&mut self, frame: &mut Frame, palette: &Palette) {
        let full_area = frame.area();
        frame.render_widget(Block::default().style(palette.style(UiElement::Root)), full_area);

        let (width, height) = self.window_size();
        let area = centered_rect(width, height, full_area);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(palette.style(UiElement::Window))
            .border_style(palette.style(UiElement::Border))
            .title(Span::styled(format!(" {} ", self.title), palette.style(UiElement::Title)))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)]).split(inner);

        frame.render_widget(
            Paragraph::new(self.message)
                .style(palette.style(UiElement::Textbox))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "<  OK  >",
                palette.style(UiElement::ActiveButton).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output> {
        if is_cancel_chord(&key) {
            return Some(());
        }
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../test/ui/message_box.rs"]
mod tests;
