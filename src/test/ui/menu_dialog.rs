use super::{ButtonFocus, Dialog, MenuDialog};
use crate::ui::{MenuItem, Palette};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

fn items() -> Vec<MenuItem> {
    (1..=12)
        .map(|idx| {
            let glyph = match idx {
                1 => "┌─",
                12 => "└─",
                _ => "├─",
            };
            let name = if idx == 12 { "Quit".to_string() } else { format!("host{idx}") };
            MenuItem::new(idx.to_string(), format!("{glyph} {name}"))
        })
        .collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render_to_text(dialog: &mut MenuDialog, palette: &Palette, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| dialog.render(frame, palette)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn starts_on_first_item() {
    let items = items();
    let dialog = MenuDialog::new("Menu", "Pick one", &items, false);
    assert_eq!(dialog.selected_tag(), Some("1"));
    assert_eq!(dialog.focus, ButtonFocus::Ok);
}

#[test]
fn enter_returns_selected_tag() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);

    assert_eq!(dialog.handle_key(key(KeyCode::Down)), None);
    assert_eq!(dialog.handle_key(key(KeyCode::Char('j'))), None);
    assert_eq!(dialog.handle_key(key(KeyCode::Up)), None);

    assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(Some("2".to_string())));
}

#[test]
fn movement_stops_at_list_edges() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);

    dialog.handle_key(key(KeyCode::Char('k')));
    assert_eq!(dialog.selected_tag(), Some("1"));

    dialog.handle_key(key(KeyCode::End));
    assert_eq!(dialog.selected_tag(), Some("12"));
    dialog.handle_key(key(KeyCode::Down));
    assert_eq!(dialog.selected_tag(), Some("12"));

    dialog.handle_key(key(KeyCode::Home));
    assert_eq!(dialog.selected_tag(), Some("1"));
}

#[test]
fn escape_and_ctrl_c_cancel() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);
    assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(None));

    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(dialog.handle_key(ctrl_c), Some(None));
}

#[test]
fn digits_jump_by_tag_prefix() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);

    dialog.handle_key(key(KeyCode::Char('1')));
    assert_eq!(dialog.selected_tag(), Some("1"));
    dialog.handle_key(key(KeyCode::Char('2')));
    assert_eq!(dialog.selected_tag(), Some("12"));

    // "123" matches nothing, so the buffer restarts at "3".
    dialog.handle_key(key(KeyCode::Char('3')));
    assert_eq!(dialog.selected_tag(), Some("3"));
    assert_eq!(dialog.tag_buffer, "3");
}

#[test]
fn non_digit_key_resets_typed_tag() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);

    dialog.handle_key(key(KeyCode::Char('1')));
    dialog.handle_key(key(KeyCode::Down));
    assert!(dialog.tag_buffer.is_empty());

    dialog.handle_key(key(KeyCode::Char('1')));
    assert_eq!(dialog.selected_tag(), Some("1"));
}

#[test]
fn unmatched_digit_leaves_selection_alone() {
    let items = vec![MenuItem::new("1", "┌─ web"), MenuItem::new("2", "└─ Quit")];
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);

    dialog.handle_key(key(KeyCode::Char('2')));
    dialog.handle_key(key(KeyCode::Char('9')));
    assert_eq!(dialog.selected_tag(), Some("2"));
    assert!(dialog.tag_buffer.is_empty());
}

#[test]
fn cancel_button_returns_none_when_shown() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, true);

    dialog.handle_key(key(KeyCode::Tab));
    assert_eq!(dialog.focus, ButtonFocus::Cancel);
    assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(None));
}

#[test]
fn focus_stays_on_ok_without_cancel_button() {
    let items = items();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);

    dialog.handle_key(key(KeyCode::Right));
    assert_eq!(dialog.focus, ButtonFocus::Ok);
    assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(Some("1".to_string())));
}

#[test]
fn empty_list_submits_nothing() {
    let items: Vec<MenuItem> = Vec::new();
    let mut dialog = MenuDialog::new("Menu", "Pick one", &items, false);
    assert_eq!(dialog.selected_tag(), None);
    assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(None));
}

#[test]
fn renders_title_prompt_labels_and_buttons() {
    let items = vec![
        MenuItem::new("1", "┌─ myserver"),
        MenuItem::new("2", "├─ devbox"),
        MenuItem::new("3", "└─ Quit"),
    ];
    let mut dialog = MenuDialog::new("SSH Menu", "Choose a host:", &items, true);
    let text = render_to_text(&mut dialog, &Palette::main(), 60, 16);

    assert!(text.contains(" SSH Menu "));
    assert!(text.contains("Choose a host:"));
    assert!(text.contains("1  ┌─ myserver"));
    assert!(text.contains("2  ├─ devbox"));
    assert!(text.contains("3  └─ Quit"));
    assert!(text.contains("<  OK  >"));
    assert!(text.contains("<Cancel>"));
}

#[test]
fn hides_cancel_button_in_no_cancel_mode() {
    let items = vec![MenuItem::new("1", "└─ Quit")];
    let mut dialog = MenuDialog::new("SSH Menu", "Choose a host:", &items, false);
    let text = render_to_text(&mut dialog, &Palette::main(), 60, 12);

    assert!(text.contains("<  OK  >"));
    assert!(!text.contains("<Cancel>"));
}

#[test]
fn paints_root_and_selection_with_palette_colors() {
    let items = vec![MenuItem::new("1", "┌─ web"), MenuItem::new("2", "└─ Quit")];
    let palette = Palette::red();
    let mut dialog = MenuDialog::new("Menu", "Pick", &items, false);

    let mut terminal = Terminal::new(TestBackend::new(50, 14)).expect("terminal");
    terminal.draw(|frame| dialog.render(frame, &palette)).expect("draw");
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(0, 0)].bg, palette.root.bg);

    let (x, y) = (0..buffer.area.height)
        .find_map(|y| {
            let row: Vec<&str> = (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect();
            row.windows(3).position(|cells| cells == ["w", "e", "b"]).map(|x| (x as u16, y))
        })
        .expect("selected row");
    assert_eq!(buffer[(x, y)].bg, palette.active_listbox.bg);
    assert_eq!(buffer[(x, y + 1)].bg, palette.listbox.bg);
}
