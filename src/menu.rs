//! A transient popup menu of labelled, indexed choices.
//!
//! The menu is modal: while it is open its owner forwards key messages to
//! [`Model::update`] until the menu resolves to a [`MenuOutcome::Chosen`]
//! index or to [`MenuOutcome::Dismissed`]. The index of a choice is the one
//! given when the item was built, not its position in the menu.
//!
//! ```rust
//! use bubbletea_table::menu::{MenuItem, MenuOutcome, Model};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut menu = Model::new(vec![MenuItem::new("Name", 1), MenuItem::new("Size", 2)], (5, 1));
//! let down = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! let enter = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert_eq!(menu.update(&down), MenuOutcome::Pending);
//! assert_eq!(menu.update(&enter), MenuOutcome::Chosen(2));
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::KeyMsg;
use lipgloss_extras::prelude::*;

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown in the menu.
    pub label: String,
    /// Value reported when the entry is chosen.
    pub index: usize,
}

impl MenuItem {
    /// Builds an entry.
    pub fn new(label: impl Into<String>, index: usize) -> Self {
        Self {
            label: label.into(),
            index,
        }
    }
}

/// What a key press did to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Still open.
    Pending,
    /// An entry was chosen; carries its index.
    Chosen(usize),
    /// Closed without a choice.
    Dismissed,
}

/// Key bindings of the popup menu.
#[derive(Debug, Clone)]
pub struct MenuKeyMap {
    /// Previous entry.
    pub up: key::Binding,
    /// Next entry.
    pub down: key::Binding,
    /// Choose the highlighted entry.
    pub choose: key::Binding,
    /// Close without choosing.
    pub dismiss: key::Binding,
}

impl Default for MenuKeyMap {
    fn default() -> Self {
        Self {
            up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            choose: key::new_binding(vec![
                key::with_keys_str(&["enter", "space"]),
                key::with_help("enter", "choose"),
            ]),
            dismiss: key::new_binding(vec![
                key::with_keys_str(&["esc", "q"]),
                key::with_help("esc", "cancel"),
            ]),
        }
    }
}

impl KeyMapTrait for MenuKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.choose, &self.dismiss]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.choose, &self.dismiss],
        ]
    }
}

/// Styles of the popup menu.
#[derive(Debug, Clone)]
pub struct MenuStyles {
    /// Title line.
    pub title: Style,
    /// Unselected entry.
    pub item: Style,
    /// Highlighted entry.
    pub selected: Style,
}

impl Default for MenuStyles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            item: Style::new().foreground(AdaptiveColor {
                Light: "#4A4A4A",
                Dark: "#C2C2C2",
            }),
            selected: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230")),
        }
    }
}

/// Popup menu state.
#[derive(Debug, Clone)]
pub struct Model {
    items: Vec<MenuItem>,
    cursor: usize,
    anchor: (usize, usize),
    title: String,
    /// Key bindings.
    pub keymap: MenuKeyMap,
    /// Styles.
    pub styles: MenuStyles,
}

impl Model {
    /// Opens a menu at `anchor` (row, column), relative to its owner's view.
    pub fn new(items: Vec<MenuItem>, anchor: (usize, usize)) -> Self {
        Self {
            items,
            cursor: 0,
            anchor,
            title: String::new(),
            keymap: MenuKeyMap::default(),
            styles: MenuStyles::default(),
        }
    }

    /// Sets a title shown above the entries.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Entries in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Position of the highlighted entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Where the owner should draw the menu.
    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    /// The highlighted entry.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.cursor)
    }

    /// Handles one key press.
    pub fn update(&mut self, msg: &KeyMsg) -> MenuOutcome {
        if self.keymap.dismiss.matches(msg) {
            return MenuOutcome::Dismissed;
        }
        if self.keymap.choose.matches(msg) {
            return match self.selected_item() {
                Some(item) => MenuOutcome::Chosen(item.index),
                None => MenuOutcome::Dismissed,
            };
        }
        if self.keymap.up.matches(msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.down.matches(msg) && self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
        MenuOutcome::Pending
    }

    /// Rendered menu, one string per row.
    pub fn view_lines(&self) -> Vec<String> {
        let width = self
            .items
            .iter()
            .map(|i| crate::table::display_width(&i.label))
            .chain(std::iter::once(crate::table::display_width(&self.title)))
            .max()
            .unwrap_or(0);

        let mut rows = Vec::with_capacity(self.items.len() + 1);
        if !self.title.is_empty() {
            rows.push(self.styles.title.clone().render(&pad_right(&self.title, width + 2)));
        }
        for (i, item) in self.items.iter().enumerate() {
            let text = pad_right(&format!(" {}", item.label), width + 2);
            let style = if i == self.cursor {
                &self.styles.selected
            } else {
                &self.styles.item
            };
            rows.push(style.clone().render(&text));
        }
        rows
    }

    /// Rendered menu.
    pub fn view(&self) -> String {
        self.view_lines().join("\n")
    }
}

fn pad_right(s: &str, width: usize) -> String {
    let w = crate::table::display_width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}
