//! Styling for the table component.
//!
//! All defaults use `AdaptiveColor`, so they follow the terminal's light or
//! dark background.
//!
//! ```rust
//! use bubbletea_table::table::TableStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = TableStyles::default();
//! styles.header = Style::new().bold(true).underline(true);
//! ```

use lipgloss_extras::prelude::*;

/// Text of a checked tag cell.
pub const TAG_ON: &str = "[x]";

/// Text of an unchecked tag cell.
pub const TAG_OFF: &str = "[ ]";

/// Styles for every part of a rendered table.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Caption above the table.
    pub label: Style,
    /// Headline row.
    pub header: Style,
    /// Ordinary cells.
    pub cell: Style,
    /// Cells of the highlighted row.
    pub current_row: Style,
    /// The cell under the cursor when column selection is active.
    pub current_cell: Style,
    /// Rows whose item is selected.
    pub selected_row: Style,
    /// Checked tags.
    pub tag_on: Style,
    /// Unchecked tags.
    pub tag_off: Style,
    /// Everything while the table is disabled.
    pub disabled: Style,
    /// Shown when the table has no rows.
    pub no_items: Style,
    /// Help line.
    pub help: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            label: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            header: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            cell: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            current_row: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230")),
            current_cell: Style::new()
                .background(Color::from("212"))
                .foreground(Color::from("230"))
                .bold(true),
            selected_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            tag_on: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            tag_off: Style::new().foreground(subdued.clone()),
            disabled: Style::new().faint(true),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help: Style::new().foreground(subdued),
        }
    }
}
