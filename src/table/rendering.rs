//! View rendering.
//!
//! A row is laid out as styled segments (cells and the gaps between them),
//! clipped to the viewport by grapheme cluster, then rendered segment by
//! segment so styles never get cut in half.

use super::pad::{display_width, COLUMN_GAP};
use super::style::{TAG_OFF, TAG_ON};
use super::types::{Align, Line, PadCell};
use super::Model;
use crate::key::{self, KeyMap};
use lipgloss_extras::prelude::*;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

const NO_ITEMS: &str = "No items.";

type Segment = (String, Style);

fn plain(s: &str) -> Cow<'_, str> {
    if s.contains('\x1b') {
        Cow::Owned(strip_ansi_escapes::strip_str(s))
    } else {
        Cow::Borrowed(s)
    }
}

fn align_text(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(display_width(text));
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Keeps the part of `segments` between display cells `offset` and
/// `offset + width`. A wide grapheme crossing either edge is dropped.
fn clip(segments: Vec<Segment>, offset: usize, width: usize) -> Vec<Segment> {
    let end = offset + width;
    let mut x = 0;
    let mut out = Vec::with_capacity(segments.len());
    for (text, style) in segments {
        let mut kept = String::new();
        for g in text.graphemes(true) {
            let w = display_width(g);
            if x >= offset && x + w <= end {
                kept.push_str(g);
            }
            x += w;
        }
        if !kept.is_empty() {
            out.push((kept, style));
        }
        if x >= end {
            break;
        }
    }
    out
}

fn render_segments(segments: Vec<Segment>) -> String {
    segments
        .into_iter()
        .map(|(text, style)| style.render(&text))
        .collect()
}

impl Model {
    /// Renders the table: label, headline, visible rows, the open sort menu
    /// and the optional help line.
    pub fn view(&self) -> String {
        let mut rows = Vec::new();
        if !self.label.is_empty() {
            rows.push(self.style(&self.styles.label).render(&self.label));
        }

        let widths = self.pad.column_widths();
        if self.has_headline {
            rows.push(self.render_headline(&widths));
        }

        if self.pad.lines() == 0 {
            rows.push(self.style(&self.styles.no_items).render(NO_ITEMS));
        } else {
            for pos in self.pad.visible_range() {
                if let Some(line) = self.pad.line(pos) {
                    rows.push(self.render_line(pos, line, &widths));
                }
            }
        }

        if let Some(menu) = &self.menu {
            let (top, left) = menu.anchor();
            for (i, menu_row) in menu.view_lines().into_iter().enumerate() {
                let row = format!("{}{menu_row}", " ".repeat(left));
                match rows.get_mut(top + i) {
                    Some(slot) => *slot = row,
                    None => rows.push(row),
                }
            }
        }

        if self.show_help {
            let help = key::short_help_line(&self.keymap.short_help());
            rows.push(self.styles.help.clone().render(&help));
        }

        rows.join("\n")
    }

    fn style(&self, base: &Style) -> Style {
        if self.enabled {
            base.clone()
        } else {
            self.styles.disabled.clone()
        }
    }

    fn align_of(&self, col: usize) -> Align {
        self.pad.headline().get(col).map_or(Align::Left, |c| c.align)
    }

    fn render_headline(&self, widths: &[usize]) -> String {
        let header = self.style(&self.styles.header);
        let gap = " ".repeat(COLUMN_GAP);
        let mut segments = Vec::with_capacity(widths.len() * 2);
        for (col, width) in widths.iter().enumerate() {
            if col > 0 {
                segments.push((gap.clone(), Style::new()));
            }
            let label = self
                .pad
                .headline()
                .get(col)
                .map_or(Cow::Borrowed(""), |c| plain(&c.label));
            segments.push((align_text(&label, *width, self.align_of(col)), header.clone()));
        }
        self.finish_row(segments)
    }

    fn render_line(&self, pos: usize, line: &Line, widths: &[usize]) -> String {
        let cursor = self.pad.cur_pos();
        let is_current = pos == cursor.line;
        let selected = self
            .items
            .get(line.item_index())
            .is_some_and(|i| i.selected());
        let gap_style = if is_current {
            self.style(&self.styles.current_row)
        } else {
            Style::new()
        };
        let gap = " ".repeat(COLUMN_GAP);

        let mut segments = Vec::with_capacity(widths.len() * 2);
        for (col, width) in widths.iter().enumerate() {
            if col > 0 {
                segments.push((gap.clone(), gap_style.clone()));
            }
            let (text, base) = match line.cell(col) {
                Some(PadCell::Tag(true)) => (Cow::Borrowed(TAG_ON), &self.styles.tag_on),
                Some(PadCell::Tag(false)) => (Cow::Borrowed(TAG_OFF), &self.styles.tag_off),
                Some(PadCell::Text(s)) if selected => (plain(s), &self.styles.selected_row),
                Some(PadCell::Text(s)) => (plain(s), &self.styles.cell),
                None => (Cow::Borrowed(""), &self.styles.cell),
            };
            let base = if is_current && self.pad.column_selection() && col == cursor.column {
                &self.styles.current_cell
            } else if is_current {
                &self.styles.current_row
            } else {
                base
            };
            segments.push((align_text(&text, *width, self.align_of(col)), self.style(base)));
        }
        self.finish_row(segments)
    }

    fn finish_row(&self, segments: Vec<Segment>) -> String {
        let clipped = clip(segments, self.pad.x_offset(), self.pad.viewport_width());
        render_segments(clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|(t, _)| t.as_str()).collect()
    }

    #[test]
    fn test_align_text() {
        assert_eq!(align_text("ab", 5, Align::Left), "ab   ");
        assert_eq!(align_text("ab", 5, Align::Right), "   ab");
        assert_eq!(align_text("ab", 5, Align::Center), " ab  ");
        assert_eq!(align_text("abcdef", 3, Align::Right), "abcdef");
    }

    #[test]
    fn test_clip_across_segments() {
        let segments = vec![
            ("abcd".to_string(), Style::new()),
            (" ".to_string(), Style::new()),
            ("efgh".to_string(), Style::new()),
        ];
        let clipped = clip(segments, 2, 5);
        assert_eq!(texts(&clipped), vec!["cd", " ", "ef"]);
    }

    #[test]
    fn test_clip_drops_split_wide_grapheme() {
        let segments = vec![("a漢b".to_string(), Style::new())];
        assert_eq!(texts(&clip(segments.clone(), 0, 2)), vec!["a"]);
        assert_eq!(texts(&clip(segments, 2, 2)), vec!["b"]);
    }
}
