//! Key bindings for table navigation, toggling and sorting.
//!
//! ## Defaults
//!
//! - **Rows**: `↑` / `↓`, `pgup` / `pgdown`, `home` / `end`
//! - **Columns**: `←` / `→` (one column, or horizontal scroll)
//! - **Checkable columns**: `ctrl+n` (next), `ctrl+p` (previous)
//! - **Sort menu**: `ctrl+o`
//! - **Toggle / activate**: `space`, `enter`
//!
//! Any other printable key jumps to the next row starting with that letter.

use crate::key;

/// Key bindings used by [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Move up one row.
    pub line_up: key::Binding,
    /// Move down one row.
    pub line_down: key::Binding,
    /// Move up one page.
    pub page_up: key::Binding,
    /// Move down one page.
    pub page_down: key::Binding,
    /// Jump to the first row.
    pub go_to_start: key::Binding,
    /// Jump to the last row.
    pub go_to_end: key::Binding,
    /// One column left.
    pub column_left: key::Binding,
    /// One column right.
    pub column_right: key::Binding,
    /// Jump to the next checkable column.
    pub next_column: key::Binding,
    /// Jump to the previous checkable column.
    pub prev_column: key::Binding,
    /// Open the sort menu.
    pub sort: key::Binding,
    /// Toggle or activate the current row.
    pub activate: key::Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            line_up: key::new_binding(vec![
                key::with_keys_str(&["up"]),
                key::with_help("↑", "up"),
            ]),
            line_down: key::new_binding(vec![
                key::with_keys_str(&["down"]),
                key::with_help("↓", "down"),
            ]),
            page_up: key::new_binding(vec![
                key::with_keys_str(&["pgup"]),
                key::with_help("pgup", "page up"),
            ]),
            page_down: key::new_binding(vec![
                key::with_keys_str(&["pgdown"]),
                key::with_help("pgdn", "page down"),
            ]),
            go_to_start: key::new_binding(vec![
                key::with_keys_str(&["home"]),
                key::with_help("home", "first row"),
            ]),
            go_to_end: key::new_binding(vec![
                key::with_keys_str(&["end"]),
                key::with_help("end", "last row"),
            ]),
            column_left: key::new_binding(vec![
                key::with_keys_str(&["left"]),
                key::with_help("←", "left"),
            ]),
            column_right: key::new_binding(vec![
                key::with_keys_str(&["right"]),
                key::with_help("→", "right"),
            ]),
            next_column: key::new_binding(vec![
                key::with_keys_str(&["ctrl+n"]),
                key::with_help("ctrl+n", "next checkbox"),
            ]),
            prev_column: key::new_binding(vec![
                key::with_keys_str(&["ctrl+p"]),
                key::with_help("ctrl+p", "prev checkbox"),
            ]),
            sort: key::new_binding(vec![
                key::with_keys_str(&["ctrl+o"]),
                key::with_help("ctrl+o", "sort"),
            ]),
            activate: key::new_binding(vec![
                key::with_keys_str(&["space", "enter"]),
                key::with_help("space", "toggle"),
            ]),
        }
    }
}

impl key::KeyMap for TableKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.line_up,
            &self.line_down,
            &self.activate,
            &self.next_column,
            &self.sort,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.line_up,
                &self.line_down,
                &self.page_up,
                &self.page_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![
                &self.column_left,
                &self.column_right,
                &self.next_column,
                &self.prev_column,
            ],
            vec![&self.activate, &self.sort],
        ]
    }
}
