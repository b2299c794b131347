use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

// Shared centered popup helper.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let popup_x = area.x + area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.y + area.height.saturating_sub(popup_height) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Terminal cell width of `text`, clamped to `u16`.
pub(crate) fn display_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Widest line in `text`.
pub(crate) fn max_line_width(text: &str) -> u16 {
    text.lines().map(display_width).max().unwrap_or(0)
}

#[cfg(test)]
#[path = "../test/ui/layout.rs"]
mod tests;
