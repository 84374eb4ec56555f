//! Row selection and checkable-cell toggling.
//!
//! What a selection request does depends on the selection mode and on the
//! column under the cursor:
//!
//! | mode   | cursor column        | effect                                        |
//! |--------|----------------------|-----------------------------------------------|
//! | single | not checkable        | highlight, then select (deselects the others) |
//! | single | checkable            | flip that cell                                |
//! | multi  | 0 (tag column)       | select or deselect the row, mirror in the tag |
//! | multi  | checkable data cell  | flip that cell                                |
//!
//! In single mode, deselecting the current row clears every selection.

use super::error::TableError;
use super::types::{Line, TableItem};
use super::Model;

impl Model {
    /// Selects or deselects the item with index `index`.
    ///
    /// # Panics
    ///
    /// Panics if no item has this index or the item has no line. Both mean
    /// the index did not come from this table.
    pub fn select_item(&mut self, index: usize, selected: bool) {
        if let Err(err) = self.try_select_item(index, selected) {
            panic!("select_item: {err}");
        }
    }

    /// Like [`Model::select_item`], returning an error instead of panicking.
    ///
    /// # Errors
    ///
    /// [`TableError::NoSuchItem`] for an unknown index,
    /// [`TableError::NoSuchLine`] when the item has no line.
    pub fn try_select_item(&mut self, index: usize, selected: bool) -> Result<(), TableError> {
        let label = self
            .items
            .get(index)
            .map(|i| i.label().to_string())
            .ok_or(TableError::NoSuchItem(index))?;
        let col = self.pad.cur_pos().column;
        let line = self
            .pad
            .line_of_item(index)
            .ok_or(TableError::NoSuchLine { line: index, column: col })?;
        let is_current = self.pad.current_line().map(Line::item_index) == Some(index);
        let multi = self.columns.tagged();

        if !multi && !self.checkable_physical(col) {
            if !selected && is_current {
                self.deselect_all_items();
            } else {
                self.pad.scroll_to_line(line);
                self.base_select(index, selected);
            }
        } else if multi && col == 0 {
            self.pad.scroll_to_line(line);
            self.base_select(index, selected);
            log::info!("{label} is selected: {}", if selected { "yes" } else { "no" });
            if let Some(line) = self.pad.item_line_mut(index) {
                line.set_tag(0, selected);
            }
        }

        for logical in 0..self.header.columns() {
            if !self.header.checkable(logical) || self.columns.physical(logical) != col {
                continue;
            }
            let on = !self.items[index].cell(logical).is_some_and(|c| c.checked);
            if let Some(cell) = self.items[index].cell_mut(logical) {
                cell.checked = on;
            }
            if let Some(line) = self.pad.item_line_mut(index) {
                line.set_tag(col, on);
            }
            log::info!("{label}: column {logical} checked: {on}");
        }

        self.draw();
        Ok(())
    }

    /// Flips the current row through [`Model::select_item`].
    pub fn toggle_current_item(&mut self) {
        if let Some(index) = self.current_item() {
            let selected = self.items.get(index).is_some_and(TableItem::selected);
            self.select_item(index, !selected);
        }
    }

    /// Marks the highlighted row's item selected. The highlight does not move.
    pub fn select_current_item(&mut self) {
        if let Some(index) = self.current_item() {
            self.base_select(index, true);
        }
    }

    /// Clears the selection of every item and every row tag. The highlight
    /// stays where it is.
    pub fn deselect_all_items(&mut self) {
        log::info!("deselecting all items");
        self.items.iter_mut().for_each(|i| i.set_selected(false));
        if self.columns.tagged() {
            self.pad.clear_tags(0);
        }
        self.draw();
    }

    /// Index of the item under the highlight, `None` for an empty table.
    pub fn current_item(&self) -> Option<usize> {
        self.pad.current_line().map(Line::item_index)
    }

    /// The item under the highlight.
    pub fn current_item_ref(&self) -> Option<&TableItem> {
        self.current_item().and_then(|i| self.items.get(i))
    }

    /// Highlights the row of item `index`. Unknown indices are ignored.
    pub fn set_current_item(&mut self, index: usize) {
        if let Some(line) = self.pad.line_of_item(index) {
            self.pad.scroll_to_line(line);
        }
    }

    fn base_select(&mut self, index: usize, selected: bool) {
        if selected && !self.columns.tagged() {
            self.items.iter_mut().for_each(|i| i.set_selected(false));
        }
        if let Some(item) = self.items.get_mut(index) {
            item.set_selected(selected);
        }
    }
}
