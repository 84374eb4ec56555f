//! The scrollable line store behind a table.
//!
//! A [`Pad`] keeps the headline, the rendered [`Line`]s in display order, the
//! cursor (line and physical column), the viewport, and the sort order. It
//! knows nothing about items or selection. Those belong to the table model,
//! which is the only owner of its pad.

use super::error::TableError;
use super::header::Headline;
use super::sort::{LexicalSort, SortOrder, SortStrategy};
use super::types::{Line, PadCell, Size};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Width of a rendered tag cell (`[x]`).
pub const TAG_WIDTH: usize = 3;

/// Display cells between two columns.
pub const COLUMN_GAP: usize = 1;

/// Display cells moved by one horizontal scroll step.
const HORIZONTAL_STEP: usize = 4;

/// Display width of a label, ignoring ANSI styling.
pub(crate) fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        UnicodeWidthStr::width(strip_ansi_escapes::strip_str(s).as_str())
    } else {
        UnicodeWidthStr::width(s)
    }
}

fn starts_with_ignore_case(text: &str, key: char) -> bool {
    let wanted: Vec<char> = key.to_lowercase().collect();
    text.chars()
        .flat_map(char::to_lowercase)
        .take(wanted.len())
        .eq(wanted.iter().copied())
}

/// Cursor position: line in display order and physical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line index in display order.
    pub line: usize,
    /// Physical column.
    pub column: usize,
}

/// Cursor motions the pad understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMotion {
    /// One line up.
    LineUp,
    /// One line down.
    LineDown,
    /// One page up.
    PageUp,
    /// One page down.
    PageDown,
    /// First line.
    Start,
    /// Last line.
    End,
    /// One column left, or scroll left without column selection.
    Left,
    /// One column right, or scroll right without column selection.
    Right,
}

/// Line store, cursor and viewport of a table.
pub struct Pad {
    headline: Headline,
    lines: Vec<Line>,
    cursor: Position,
    column_selection: bool,
    sort: Option<SortOrder>,
    keep_sorting: bool,
    strategy: Box<dyn SortStrategy>,
    visible_rows: usize,
    viewport_width: usize,
    top: usize,
    x_offset: usize,
    redraws: usize,
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

impl Pad {
    /// An empty pad with lexical sorting and a 10-row viewport.
    pub fn new() -> Self {
        Self {
            headline: Headline::default(),
            lines: Vec::new(),
            cursor: Position::default(),
            column_selection: false,
            sort: None,
            keep_sorting: false,
            strategy: Box::new(LexicalSort),
            visible_rows: 10,
            viewport_width: 80,
            top: 0,
            x_offset: 0,
            redraws: 0,
        }
    }

    /// Replaces the sort strategy and re-sorts if a sort is active.
    pub fn set_sort_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
        self.sort_lines();
    }

    // -------------------------------------------------------------------------
    // Headline
    // -------------------------------------------------------------------------

    /// Installs encoded headline entries (marker + label).
    ///
    /// Returns whether the headline has any visible label. Entries without
    /// a valid alignment marker are rejected and leave the pad unchanged.
    pub fn set_headline<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<bool, TableError> {
        let headline = Headline::from_encoded(entries)?;
        let has_content = headline.has_content();
        self.headline = headline;
        let last = self.cols().saturating_sub(1);
        self.cursor.column = self.cursor.column.min(last);
        if self.sort.is_some_and(|s| s.column >= self.cols()) {
            self.sort = None;
        }
        Ok(has_content)
    }

    /// The installed headline.
    pub fn headline(&self) -> &Headline {
        &self.headline
    }

    /// Number of physical columns.
    pub fn cols(&self) -> usize {
        self.headline.len()
    }

    // -------------------------------------------------------------------------
    // Lines
    // -------------------------------------------------------------------------

    /// Appends a line, keeping the active sort order.
    pub fn append(&mut self, line: Line) {
        self.lines.push(line);
        if self.sort.is_some() && !self.keep_sorting {
            self.sort_lines();
        }
    }

    /// Removes every line and resets the cursor row and viewport.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor.line = 0;
        self.top = 0;
    }

    /// Replaces all lines at once, keeping the cursor on the same item.
    pub fn replace_lines(&mut self, lines: Vec<Line>) {
        let current = self.current_line().map(Line::item_index);
        self.lines = lines;
        if self.sort.is_some() && !self.keep_sorting {
            self.sort_lines();
        }
        self.restore_cursor(current);
    }

    /// Number of lines.
    pub fn lines(&self) -> usize {
        self.lines.len()
    }

    /// Line at display position `pos`.
    pub fn line(&self, pos: usize) -> Option<&Line> {
        self.lines.get(pos)
    }

    /// Mutable line at display position `pos`.
    pub fn modify_line(&mut self, pos: usize) -> Option<&mut Line> {
        self.lines.get_mut(pos)
    }

    /// All lines in display order.
    pub fn iter_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Display position of the line built from item `item`.
    pub fn line_of_item(&self, item: usize) -> Option<usize> {
        self.lines.iter().position(|l| l.item_index() == item)
    }

    /// Mutable line built from item `item`.
    pub fn item_line_mut(&mut self, item: usize) -> Option<&mut Line> {
        self.lines.iter_mut().find(|l| l.item_index() == item)
    }

    /// Clears every tag cell at physical column `col`.
    pub fn clear_tags(&mut self, col: usize) {
        for line in &mut self.lines {
            line.set_tag(col, false);
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Cursor position.
    pub fn cur_pos(&self) -> Position {
        self.cursor
    }

    /// Line under the cursor, `None` when the pad is empty.
    pub fn current_line(&self) -> Option<&Line> {
        self.lines.get(self.cursor.line)
    }

    /// Moves the cursor to line `pos`, clamped to the existing lines.
    pub fn scroll_to_line(&mut self, pos: usize) {
        self.cursor.line = pos.min(self.lines.len().saturating_sub(1));
        self.ensure_visible();
    }

    /// Moves the cursor one column right, if there is one.
    pub fn scroll_right(&mut self) {
        if self.cursor.column + 1 < self.cols() {
            self.cursor.column += 1;
            self.ensure_column_visible();
        }
    }

    /// Moves the cursor one column left, if there is one.
    pub fn scroll_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
            self.ensure_column_visible();
        }
    }

    /// Enables moving the cursor between columns with left/right.
    pub fn set_column_selection(&mut self, on: bool) {
        self.column_selection = on;
        if !on {
            self.cursor.column = 0;
        }
    }

    /// Whether left/right move the cursor column.
    pub fn column_selection(&self) -> bool {
        self.column_selection
    }

    /// Applies a cursor motion. Returns whether the motion was understood.
    pub fn apply(&mut self, motion: PadMotion) -> bool {
        let last = self.lines.len().saturating_sub(1);
        let page = self.visible_rows.max(1);
        match motion {
            PadMotion::LineUp => self.scroll_to_line(self.cursor.line.saturating_sub(1)),
            PadMotion::LineDown => self.scroll_to_line((self.cursor.line + 1).min(last)),
            PadMotion::PageUp => self.scroll_to_line(self.cursor.line.saturating_sub(page)),
            PadMotion::PageDown => self.scroll_to_line(self.cursor.line + page),
            PadMotion::Start => self.scroll_to_line(0),
            PadMotion::End => self.scroll_to_line(last),
            PadMotion::Left if self.column_selection => self.scroll_left(),
            PadMotion::Right if self.column_selection => self.scroll_right(),
            PadMotion::Left => self.x_offset = self.x_offset.saturating_sub(HORIZONTAL_STEP),
            PadMotion::Right => {
                let max = self.content_width().saturating_sub(self.viewport_width);
                self.x_offset = (self.x_offset + HORIZONTAL_STEP).min(max);
            }
        }
        true
    }

    /// Moves the cursor to the next line whose first text cell starts with
    /// `key`, ignoring case and wrapping around. Returns whether one was
    /// found.
    pub fn set_item_by_key(&mut self, key: char) -> bool {
        let n = self.lines.len();
        if n == 0 {
            return false;
        }
        let start = self.cursor.line;
        for step in 1..=n {
            let pos = (start + step) % n;
            let hit = self.lines[pos]
                .cells()
                .iter()
                .find_map(PadCell::text)
                .is_some_and(|t| starts_with_ignore_case(t, key));
            if hit {
                self.scroll_to_line(pos);
                return true;
            }
        }
        false
    }

    fn restore_cursor(&mut self, item: Option<usize>) {
        match item.and_then(|i| self.line_of_item(i)) {
            Some(pos) => self.scroll_to_line(pos),
            None => self.scroll_to_line(self.cursor.line),
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Sorts by physical column `column`. Ignored while sorting is pinned or
    /// when the column does not exist. Returns whether the order changed.
    pub fn set_order(&mut self, column: usize, descending: bool) -> bool {
        if self.keep_sorting || column >= self.cols() {
            return false;
        }
        let current = self.current_line().map(Line::item_index);
        self.sort = Some(SortOrder { column, descending });
        self.sort_lines();
        self.restore_cursor(current);
        true
    }

    /// Current sort order, if any.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Pins the current line order.
    pub fn set_keep_sorting(&mut self, keep: bool) {
        self.keep_sorting = keep;
    }

    /// Whether the line order is pinned.
    pub fn keep_sorting(&self) -> bool {
        self.keep_sorting
    }

    fn sort_lines(&mut self) {
        let Some(order) = self.sort else {
            return;
        };
        let strategy = &self.strategy;
        self.lines.sort_by(|a, b| {
            let ord = match (a.cell(order.column), b.cell(order.column)) {
                (Some(x), Some(y)) => strategy.compare(x, y),
                (x, y) => x.is_some().cmp(&y.is_some()),
            };
            if order.descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    /// Sets the viewport to `width` display cells and `rows` lines.
    pub fn set_viewport(&mut self, width: usize, rows: usize) {
        self.viewport_width = width;
        self.visible_rows = rows;
        self.ensure_visible();
        let max = self.content_width().saturating_sub(self.viewport_width);
        self.x_offset = self.x_offset.min(max);
    }

    /// Number of data lines the viewport shows.
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Viewport width in display cells.
    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    /// Horizontal scroll offset in display cells.
    pub fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// Display positions of the lines inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.top + self.visible_rows).min(self.lines.len());
        self.top.min(end)..end
    }

    fn ensure_visible(&mut self) {
        let rows = self.visible_rows.max(1);
        if self.cursor.line < self.top {
            self.top = self.cursor.line;
        } else if self.cursor.line >= self.top + rows {
            self.top = self.cursor.line + 1 - rows;
        }
        let max_top = self.lines.len().saturating_sub(rows);
        self.top = self.top.min(max_top);
    }

    fn ensure_column_visible(&mut self) {
        let widths = self.column_widths();
        let start: usize = widths
            .iter()
            .take(self.cursor.column)
            .map(|w| w + COLUMN_GAP)
            .sum();
        let width = widths.get(self.cursor.column).copied().unwrap_or(0);
        if start < self.x_offset {
            self.x_offset = start;
        } else if start + width > self.x_offset + self.viewport_width {
            self.x_offset = (start + width).saturating_sub(self.viewport_width);
        }
    }

    // -------------------------------------------------------------------------
    // Measuring and drawing
    // -------------------------------------------------------------------------

    /// Display width of each physical column: the widest of its label and
    /// its cells.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headline
            .columns()
            .iter()
            .map(|c| display_width(&c.label))
            .collect();
        for line in &self.lines {
            for (col, cell) in line.cells().iter().enumerate() {
                let w = match cell {
                    PadCell::Text(s) => display_width(s),
                    PadCell::Tag(_) => TAG_WIDTH,
                };
                if let Some(slot) = widths.get_mut(col) {
                    *slot = (*slot).max(w);
                }
            }
        }
        widths
    }

    /// Width of a full rendered row.
    pub fn content_width(&self) -> usize {
        let widths = self.column_widths();
        let gaps = widths.len().saturating_sub(1) * COLUMN_GAP;
        widths.iter().sum::<usize>() + gaps
    }

    /// Natural size of the table: full row width, and all lines plus the
    /// headline.
    pub fn table_size(&self) -> Size {
        let head = usize::from(self.headline.has_content());
        Size::new(self.content_width(), self.lines.len() + head)
    }

    /// Marks the pad for redrawing.
    pub fn draw(&mut self) {
        self.redraws += 1;
    }

    /// How many times the pad was redrawn.
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_line(item: usize, cells: &[&str]) -> Line {
        Line::new(
            cells.iter().map(|c| PadCell::Text(c.to_string())).collect(),
            item,
        )
    }

    fn pad_with(rows: &[&[&str]]) -> Pad {
        let mut pad = Pad::new();
        pad.set_headline(&["LName", "RSize"]).unwrap();
        for (i, row) in rows.iter().enumerate() {
            pad.append(text_line(i, row));
        }
        pad
    }

    #[test]
    fn test_set_headline_reports_content() {
        let mut pad = Pad::new();
        assert!(!pad.set_headline(&["L", "L"]).unwrap());
        assert!(pad.set_headline(&["L", "LName"]).unwrap());
        assert_eq!(pad.cols(), 2);
        assert!(pad.set_headline(&["Name"]).is_err());
        assert_eq!(pad.cols(), 2);
    }

    #[test]
    fn test_scroll_to_line_clamps() {
        let mut pad = pad_with(&[&["a", "1"], &["b", "2"]]);
        pad.scroll_to_line(7);
        assert_eq!(pad.cur_pos().line, 1);
        pad.clear();
        pad.scroll_to_line(3);
        assert_eq!(pad.cur_pos().line, 0);
        assert!(pad.current_line().is_none());
    }

    #[test]
    fn test_set_order_keeps_cursor_on_item() {
        let mut pad = pad_with(&[&["b", "2"], &["a", "1"], &["c", "3"]]);
        pad.scroll_to_line(0);
        assert!(pad.set_order(0, false));
        let order: Vec<usize> = pad.iter_lines().map(Line::item_index).collect();
        assert_eq!(order, vec![1, 0, 2]);
        assert_eq!(pad.current_line().map(Line::item_index), Some(0));

        assert!(pad.set_order(0, true));
        let order: Vec<usize> = pad.iter_lines().map(Line::item_index).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_set_order_ignored_while_pinned() {
        let mut pad = pad_with(&[&["b", "2"], &["a", "1"]]);
        pad.set_keep_sorting(true);
        assert!(!pad.set_order(0, false));
        assert!(pad.sort_order().is_none());
        assert!(!pad.set_order(5, false));
    }

    #[test]
    fn test_append_respects_active_sort() {
        let mut pad = pad_with(&[&["b", "2"]]);
        pad.set_order(0, false);
        pad.append(text_line(1, &["a", "1"]));
        assert_eq!(pad.line(0).map(Line::item_index), Some(1));
    }

    #[test]
    fn test_column_motion_needs_column_selection() {
        let mut pad = pad_with(&[&["a", "1"]]);
        pad.apply(PadMotion::Right);
        assert_eq!(pad.cur_pos().column, 0);
        pad.set_column_selection(true);
        pad.apply(PadMotion::Right);
        assert_eq!(pad.cur_pos().column, 1);
        pad.apply(PadMotion::Right);
        assert_eq!(pad.cur_pos().column, 1);
        pad.apply(PadMotion::Left);
        assert_eq!(pad.cur_pos().column, 0);
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let rows: Vec<String> = (0..20).map(|i| format!("row{i}")).collect();
        let mut pad = Pad::new();
        pad.set_headline(&["LName"]).unwrap();
        for (i, r) in rows.iter().enumerate() {
            pad.append(text_line(i, &[r.as_str()]));
        }
        pad.set_viewport(20, 5);
        pad.apply(PadMotion::End);
        assert_eq!(pad.visible_range(), 15..20);
        pad.apply(PadMotion::PageUp);
        assert_eq!(pad.cur_pos().line, 14);
        assert_eq!(pad.visible_range(), 14..19);
        pad.apply(PadMotion::Start);
        assert_eq!(pad.visible_range(), 0..5);
    }

    #[test]
    fn test_set_item_by_key_wraps() {
        let mut pad = pad_with(&[&["apple", "1"], &["Banana", "2"], &["avocado", "3"]]);
        assert!(pad.set_item_by_key('a'));
        assert_eq!(pad.cur_pos().line, 2);
        assert!(pad.set_item_by_key('A'));
        assert_eq!(pad.cur_pos().line, 0);
        assert!(pad.set_item_by_key('b'));
        assert_eq!(pad.cur_pos().line, 1);
        assert!(!pad.set_item_by_key('z'));
    }

    #[test]
    fn test_table_size() {
        let mut pad = pad_with(&[&["apple", "10"]]);
        pad.append(Line::new(vec![PadCell::Text("x".into()), PadCell::Tag(true)], 1));
        assert_eq!(pad.column_widths(), vec![5, 4]);
        assert_eq!(pad.table_size(), Size::new(10, 3));
    }
}
