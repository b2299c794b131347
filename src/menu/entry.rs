use crate::ui::MenuItem;

pub const TOP_GLYPH: &str = "┌─";
pub const MIDDLE_GLYPH: &str = "├─";
pub const TERMINATOR_GLYPH: &str = "└─";
pub const QUIT_LABEL: &str = "Quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Connect(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// 1-based, contiguous.
    pub index: usize,
    pub label: String,
    pub action: MenuAction,
}

impl MenuEntry {
    pub fn tag(&self) -> String {
        self.index.to_string()
    }
}

/// Ordered host entries followed by a single Quit entry.
///
/// Built fresh for every pass of the menu loop and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuList {
    entries: Vec<MenuEntry>,
}

impl MenuList {
    pub fn build(hosts: &[String]) -> Self {
        let mut entries: Vec<MenuEntry> = hosts
            .iter()
            .enumerate()
            .map(|(position, host)| {
                let glyph = if position == 0 { TOP_GLYPH } else { MIDDLE_GLYPH };
                MenuEntry {
                    index: position + 1,
                    label: format!("{glyph} {host}"),
                    action: MenuAction::Connect(host.clone()),
                }
            })
            .collect();

        entries.push(MenuEntry {
            index: hosts.len() + 1,
            label: format!("{TERMINATOR_GLYPH} {QUIT_LABEL}"),
            action: MenuAction::Quit,
        });

        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the Quit entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn host_count(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        index.checked_sub(1).and_then(|position| self.entries.get(position))
    }

    /// Map a raw selection back to an action. Anything that is not exactly
    /// a known index (empty, padded, signed, non-numeric, out of range) is
    /// `None`.
    pub fn resolve(&self, selection: &str) -> Option<&MenuAction> {
        if selection.is_empty() || !selection.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        let index = selection.parse::<usize>().ok()?;
        self.get(index).map(|entry| &entry.action)
    }

    pub fn to_items(&self) -> Vec<MenuItem> {
        self.entries.iter().map(|entry| MenuItem::new(entry.tag(), entry.label.clone())).collect()
    }
}

#[cfg(test)]
#[path = "../test/menu/entry.rs"]
mod tests;
