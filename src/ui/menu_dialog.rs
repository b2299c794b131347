//! Single-select list dialog.

use super::{
    MenuItem,
    layout::{centered_rect, display_width, max_line_width},
    terminal::{Dialog, is_cancel_chord},
    theme::{Palette, UiElement},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const MIN_WINDOW_WIDTH: u16 = 30;
// Borders, prompt/list spacer, list/button spacer, button row.
const WINDOW_CHROME_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonFocus {
    Ok,
    Cancel,
}

pub(crate) struct MenuDialog<'a> {
    title: &'a str,
    prompt: &'a str,
    items: &'a [MenuItem],
    show_cancel: bool,
    pub(crate) list_state: ListState,
    pub(crate) focus: ButtonFocus,
    pub(crate) tag_buffer: String,
}

impl<'a> MenuDialog<'a> {
    pub(crate) fn new(title: &'a str, prompt: &'a str, items: &'a [MenuItem], show_cancel: bool) -> Self {
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title,
            prompt,
            items,
            show_cancel,
            list_state,
            focus: ButtonFocus::Ok,
            tag_buffer: String::new(),
        }
    }

    pub(crate) fn selected_tag(&self) -> Option<&str> {
        self.list_state.selected().and_then(|idx| self.items.get(idx)).map(|item| item.tag.as_str())
    }

    fn select_previous(&mut self) {
        if let Some(idx) = self.list_state.selected() {
            self.list_state.select(Some(idx.saturating_sub(1)));
        }
    }

    fn select_next(&mut self) {
        if let Some(idx) = self.list_state.selected()
            && idx + 1 < self.items.len()
        {
            self.list_state.select(Some(idx + 1));
        }
    }

    fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }

    /// Extend the typed tag and jump to the first item it prefixes. If the
    /// extended tag matches nothing, start over from the new digit alone.
    fn jump_to_tag(&mut self, digit: char) {
        self.tag_buffer.push(digit);
        if let Some(idx) = self.find_tag_prefix(&self.tag_buffer) {
            self.list_state.select(Some(idx));
            return;
        }

        self.tag_buffer.clear();
        self.tag_buffer.push(digit);
        match self.find_tag_prefix(&self.tag_buffer) {
            Some(idx) => self.list_state.select(Some(idx)),
            None => self.tag_buffer.clear(),
        }
    }

    fn find_tag_prefix(&self, prefix: &str) -> Option<usize> {
        self.items.iter().position(|item| item.tag.starts_with(prefix))
    }

    fn toggle_focus(&mut self) {
        if !self.show_cancel {
            return;
        }
        self.focus = match self.focus {
            ButtonFocus::Ok => ButtonFocus::Cancel,
            ButtonFocus::Cancel => ButtonFocus::Ok,
        };
    }

    fn submit(&self) -> Option<String> {
        match self.focus {
            ButtonFocus::Cancel => None,
            ButtonFocus::Ok => self.selected_tag().map(str::to_string),
        }
    }

    fn tag_width(&self) -> usize {
        self.items.iter().map(|item| display_width(&item.tag) as usize).max().unwrap_or(0)
    }

    fn item_text(&self, item: &MenuItem, tag_width: usize) -> String {
        format!("{:>tag_width$}  {}", item.tag, item.label)
    }

    fn window_size(&self) -> (u16, u16) {
        let tag_width = self.tag_width();
        let widest_item = self.items.iter().map(|item| display_width(&self.item_text(item, tag_width))).max().unwrap_or(0);
        let content_width = widest_item
            .max(max_line_width(self.prompt))
            .max(display_width(self.title).saturating_add(2));
        let width = content_width.saturating_add(6).max(MIN_WINDOW_WIDTH);

        let prompt_lines = u16::try_from(self.prompt.lines().count()).unwrap_or(u16::MAX);
        let list_lines = u16::try_from(self.items.len()).unwrap_or(u16::MAX);
        let height = WINDOW_CHROME_HEIGHT.saturating_add(prompt_lines).saturating_add(list_lines);
        (width, height)
    }

    fn button_line(&self, palette: &Palette) -> Line<'static> {
        let style_for = |focus: ButtonFocus| {
            if self.focus == focus {
                palette.style(UiElement::ActiveButton).add_modifier(Modifier::BOLD)
            } else {
                palette.style(UiElement::Button)
            }
        };

        let mut spans = vec![Span::styled("<  OK  >", style_for(ButtonFocus::Ok))];
        if self.show_cancel {
            spans.push(Span::styled("   ", palette.style(UiElement::Window)));
            spans.push(Span::styled("<Cancel>", style_for(ButtonFocus::Cancel)));
        }
        Line::from(spans)
    }
}

impl Dialog for MenuDialog<'_> {
    type Output = Option<String>;

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

        let prompt_lines = u16::try_from(self.prompt.lines().count()).unwrap_or(u16::MAX);
        let chunks = Layout::vertical([
            Constraint::Length(prompt_lines),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(self.prompt).style(palette.style(UiElement::Textbox)).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let tag_width = self.tag_width();
        let list_items: Vec<ListItem> = self.items.iter().map(|item| ListItem::new(self.item_text(item, tag_width))).collect();
        let list = List::new(list_items)
            .style(palette.style(UiElement::Listbox))
            .highlight_style(palette.style(UiElement::ActiveListbox));
        frame.render_stateful_widget(list, chunks[2], &mut self.list_state);

        frame.render_widget(Paragraph::new(self.button_line(palette)).alignment(Alignment::Center), chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Output> {
        if is_cancel_chord(&key) {
            return Some(None);
        }

        let typed_digit = matches!(key.code, KeyCode::Char(ch) if ch.is_ascii_digit());
        if !typed_digit {
            self.tag_buffer.clear();
        }

        match key.code {
            KeyCode::Esc => return Some(None),
            KeyCode::Enter => return Some(self.submit()),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => self.toggle_focus(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => self.jump_to_tag(ch),
            _ => {}
        }
        None
    }
}

#[cfg(test)]
#[path = "../test/ui/menu_dialog.rs"]
mod tests;
