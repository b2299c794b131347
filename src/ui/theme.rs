//! Named color palettes for the dialogs.
//!
//! A palette assigns a foreground/background pair to each UI element. The
//! built-in palettes are `main`, `red` and `brown`; user palettes from the
//! settings file start from `main` and override the elements they list.

use crate::config::PaletteSpec;
use crate::{log_debug, log_warn};
use ratatui::style::{Color, Style};
use std::collections::BTreeMap;

pub const MAIN_PALETTE: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElement {
    Root,
    Window,
    Border,
    Title,
    Button,
    ActiveButton,
    Listbox,
    ActiveListbox,
    Textbox,
}

impl UiElement {
    pub const ALL: [UiElement; 9] = [
        UiElement::Root,
        UiElement::Window,
        UiElement::Border,
        UiElement::Title,
        UiElement::Button,
        UiElement::ActiveButton,
        UiElement::Listbox,
        UiElement::ActiveListbox,
        UiElement::Textbox,
    ];

    /// Key used for this element in settings-file palettes.
    pub fn key(self) -> &'static str {
        match self {
            UiElement::Root => "root",
            UiElement::Window => "window",
            UiElement::Border => "border",
            UiElement::Title => "title",
            UiElement::Button => "button",
            UiElement::ActiveButton => "actbutton",
            UiElement::Listbox => "listbox",
            UiElement::ActiveListbox => "actlistbox",
            UiElement::Textbox => "textbox",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementColors {
    pub fg: Color,
    pub bg: Color,
}

impl ElementColors {
    const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub fn style(self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub root: ElementColors,
    pub window: ElementColors,
    pub border: ElementColors,
    pub title: ElementColors,
    pub button: ElementColors,
    pub active_button: ElementColors,
    pub listbox: ElementColors,
    pub active_listbox: ElementColors,
    pub textbox: ElementColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self::main()
    }
}

impl Palette {
    pub fn main() -> Self {
        Self {
            name: MAIN_PALETTE.to_string(),
            root: ElementColors::new(Color::White, Color::Blue),
            window: ElementColors::new(Color::Black, Color::Gray),
            border: ElementColors::new(Color::Black, Color::Gray),
            title: ElementColors::new(Color::Red, Color::Gray),
            button: ElementColors::new(Color::Black, Color::Gray),
            active_button: ElementColors::new(Color::White, Color::Red),
            listbox: ElementColors::new(Color::Black, Color::Gray),
            active_listbox: ElementColors::new(Color::White, Color::Red),
            textbox: ElementColors::new(Color::Black, Color::Gray),
        }
    }

    pub fn red() -> Self {
        Self {
            name: "red".to_string(),
            root: ElementColors::new(Color::Yellow, Color::Red),
            window: ElementColors::new(Color::White, Color::Black),
            border: ElementColors::new(Color::LightRed, Color::Black),
            title: ElementColors::new(Color::LightYellow, Color::Black),
            button: ElementColors::new(Color::White, Color::Black),
            active_button: ElementColors::new(Color::Black, Color::LightRed),
            listbox: ElementColors::new(Color::White, Color::Black),
            active_listbox: ElementColors::new(Color::Black, Color::LightRed),
            textbox: ElementColors::new(Color::White, Color::Black),
        }
    }

    pub fn brown() -> Self {
        Self {
            name: "brown".to_string(),
            root: ElementColors::new(Color::Black, Color::Yellow),
            window: ElementColors::new(Color::Black, Color::Gray),
            border: ElementColors::new(Color::Yellow, Color::Gray),
            title: ElementColors::new(Color::Black, Color::Gray),
            button: ElementColors::new(Color::Black, Color::Gray),
            active_button: ElementColors::new(Color::White, Color::Yellow),
            listbox: ElementColors::new(Color::Black, Color::Gray),
            active_listbox: ElementColors::new(Color::Black, Color::Yellow),
            textbox: ElementColors::new(Color::Black, Color::Gray),
        }
    }

    /// Built-in palette by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "main" => Some(Self::main()),
            "red" => Some(Self::red()),
            "brown" => Some(Self::brown()),
            _ => None,
        }
    }

    /// Resolve a palette name against user palettes, then built-ins.
    ///
    /// Unknown names fall back to `main`.
    pub fn named(name: &str, user_palettes: &BTreeMap<String, PaletteSpec>) -> Self {
        if let Some(spec) = user_palettes.get(name) {
            return Self::from_spec(name, spec);
        }
        Self::builtin(name).unwrap_or_else(|| {
            log_debug!("Unknown palette '{}', falling back to '{}'", name, MAIN_PALETTE);
            Self::main()
        })
    }

    fn from_spec(name: &str, spec: &PaletteSpec) -> Self {
        let mut palette = Self::main();
        palette.name = name.to_string();

        for (key, pair) in spec {
            let Some(element) = UiElement::from_key(key) else {
                log_warn!("Palette '{}': unknown element '{}'", name, key);
                continue;
            };
            let colors = palette.element_mut(element);
            if let Some(token) = &pair.fg {
                match parse_color_token(token) {
                    Some(color) => colors.fg = color,
                    None => log_warn!("Palette '{}': invalid {} fg color '{}'", name, key, token),
                }
            }
            if let Some(token) = &pair.bg {
                match parse_color_token(token) {
                    Some(color) => colors.bg = color,
                    None => log_warn!("Palette '{}': invalid {} bg color '{}'", name, key, token),
                }
            }
        }

        palette
    }

    pub fn element(&self, element: UiElement) -> ElementColors {
        match element {
            UiElement::Root => self.root,
            UiElement::Window => self.window,
            UiElement::Border => self.border,
            UiElement::Title => self.title,
            UiElement::Button => self.button,
            UiElement::ActiveButton => self.active_button,
            UiElement::Listbox => self.listbox,
            UiElement::ActiveListbox => self.active_listbox,
            UiElement::Textbox => self.textbox,
        }
    }

    fn element_mut(&mut self, element: UiElement) -> &mut ElementColors {
        match element {
            UiElement::Root => &mut self.root,
            UiElement::Window => &mut self.window,
            UiElement::Border => &mut self.border,
            UiElement::Title => &mut self.title,
            UiElement::Button => &mut self.button,
            UiElement::ActiveButton => &mut self.active_button,
            UiElement::Listbox => &mut self.listbox,
            UiElement::ActiveListbox => &mut self.active_listbox,
            UiElement::Textbox => &mut self.textbox,
        }
    }

    pub fn style(&self, element: UiElement) -> Style {
        self.element(element).style()
    }
}

/// Parse `#rrggbb` or `rrggbb`.
pub(crate) fn parse_hex_color(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse an ANSI color name or hex token.
pub(crate) fn parse_color_token(token: &str) -> Option<Color> {
    let normalized = token.trim().to_ascii_lowercase().replace('-', "_");
    let color = match normalized.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" | "brown" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" | "gray" | "grey" | "lightgray" => Color::Gray,
        "bright_black" | "dark_gray" | "dark_grey" => Color::DarkGray,
        "bright_red" => Color::LightRed,
        "bright_green" => Color::LightGreen,
        "bright_yellow" => Color::LightYellow,
        "bright_blue" => Color::LightBlue,
        "bright_magenta" => Color::LightMagenta,
        "bright_cyan" => Color::LightCyan,
        "bright_white" => Color::White,
        _ => return parse_hex_color(&normalized),
    };
    Some(color)
}

#[cfg(test)]
#[path = "../test/ui/theme.rs"]
mod tests;
