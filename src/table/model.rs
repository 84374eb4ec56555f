//! Table model: construction, configuration, item ingestion and queries.
//!
//! Selection lives in `selection.rs`, key handling in `input.rs`, header
//! management in `header.rs` and the view in `rendering.rs`.

use super::error::TableError;
use super::header::Headline;
use super::keys::TableKeyMap;
use super::pad::Pad;
use super::sort::{SortOrder, SortStrategy};
use super::style::TableStyles;
use super::types::{ColumnMap, Line, PadCell, Size, TableHeader, TableItem};
use crate::menu;
use crate::Component;
use bubbletea_rs::Cmd;
use std::sync::atomic::{AtomicUsize, Ordering};

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Size reported by [`Model::preferred_width`] and
/// [`Model::preferred_height`] for tables that are not big lists.
pub const DEFAULT_SIZE: Size = Size {
    width: 40,
    height: 10,
};

/// Frame added around the natural table size of a big list.
const FRAME: usize = 2;

/// A scrollable, sortable table.
///
/// The table owns its items. Lines in the pad refer to them by index, so an
/// item's index is stable for as long as it stays in the table.
///
/// # Examples
///
/// ```rust
/// use bubbletea_table::table::{ColumnSpec, Model, TableHeader, TableItem};
///
/// let header = TableHeader::new()
///     .column("Package")
///     .with(ColumnSpec::new("Install").checkable());
/// let mut table = Model::new(header, true)
///     .with_notify(true)
///     .with_label("Packages");
///
/// table.add_item(TableItem::new(&["vim", ""]), false);
/// assert_eq!(table.items_count(), 1);
/// assert_eq!(table.encoded_headline().len(), 3);
/// ```
pub struct Model {
    pub(super) id: usize,
    pub(super) header: TableHeader,
    pub(super) headline: Headline,
    pub(super) columns: ColumnMap,
    pub(super) items: Vec<TableItem>,
    pub(super) pad: Pad,
    pub(super) has_headline: bool,
    pub(super) menu: Option<menu::Model>,
    pub(super) label: String,
    pub(super) enabled: bool,
    pub(super) focus: bool,
    pub(super) notify: bool,
    pub(super) immediate_mode: bool,
    pub(super) big_list: bool,
    pub(super) size: Size,
    pub(super) default_size: Size,
    pub(super) show_help: bool,
    /// Key bindings.
    pub keymap: TableKeyMap,
    /// Styles.
    pub styles: TableStyles,
}

impl Model {
    /// Creates a table for `header`.
    ///
    /// With `multi_selection` a synthetic tag column is put in front of the
    /// data columns; toggling it selects its row.
    ///
    /// # Panics
    ///
    /// Panics if the pad rejects the headline. Use [`Model::try_new`] to get
    /// the error instead.
    pub fn new(header: TableHeader, multi_selection: bool) -> Self {
        match Self::try_new(header, multi_selection) {
            Ok(model) => model,
            Err(err) => panic!("cannot create table: {err}"),
        }
    }

    /// Creates a table for `header`, reporting a rejected headline.
    ///
    /// # Errors
    ///
    /// [`TableError::HeadlineRejected`] if the pad does not accept the
    /// headline built from `header`.
    pub fn try_new(header: TableHeader, multi_selection: bool) -> Result<Self, TableError> {
        let columns = ColumnMap::new(multi_selection);
        let headline = Headline::build(&header, columns);
        let mut model = Self {
            id: next_id(),
            header,
            headline,
            columns,
            items: Vec::new(),
            pad: Pad::new(),
            has_headline: false,
            menu: None,
            label: String::new(),
            enabled: true,
            focus: false,
            notify: false,
            immediate_mode: false,
            big_list: false,
            size: DEFAULT_SIZE,
            default_size: DEFAULT_SIZE,
            show_help: false,
            keymap: TableKeyMap::default(),
            styles: TableStyles::default(),
        };
        model.install_headline()?;
        model.sync_viewport();
        log::debug!(
            "table {} created: {} columns, multi selection {}",
            model.id,
            model.header.columns(),
            multi_selection
        );
        Ok(model)
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Reports activation and value changes from key presses.
    pub fn with_notify(mut self, notify: bool) -> Self {
        self.set_notify(notify);
        self
    }

    /// Reports cursor moves as [`SelectionChanged`](super::TableEvent::SelectionChanged).
    pub fn with_immediate_mode(mut self, immediate: bool) -> Self {
        self.set_immediate_mode(immediate);
        self
    }

    /// Pins the line order; the sort menu is disabled.
    pub fn with_keep_sorting(mut self, keep: bool) -> Self {
        self.set_keep_sorting(keep);
        self
    }

    /// Reports the natural table size as the preferred size.
    pub fn with_big_list(mut self, big_list: bool) -> Self {
        self.big_list = big_list;
        self
    }

    /// Sets both the current and the default size.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.default_size = Size::new(width, height);
        self.set_size(width, height);
        self
    }

    /// Sets the caption shown above the table.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: TableKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces how the sort menu orders a column.
    pub fn with_sort_strategy<S: SortStrategy + 'static>(mut self, strategy: S) -> Self {
        self.pad.set_sort_strategy(Box::new(strategy));
        self
    }

    /// Shows a short help line under the rows.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self.sync_viewport();
        self
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Appends `item` and builds its line.
    ///
    /// A selected item becomes the current row. In single-selection mode it
    /// also takes the selection from every other item. Unless `batched` is
    /// set the pad is redrawn.
    pub fn add_item(&mut self, mut item: TableItem, batched: bool) {
        let index = self.items.len();
        item.set_index(index);
        self.mark_checkable(&mut item);

        if self.has_checkable_column() {
            self.pad.set_column_selection(true);
        }

        let line = self.build_line(&item);
        let selected = item.selected();
        if selected && !self.columns.tagged() {
            self.items.iter_mut().for_each(|i| i.set_selected(false));
        }
        self.items.push(item);
        self.pad.append(line);

        if selected {
            self.set_current_item(index);
        }
        if !batched {
            self.draw();
        }
    }

    /// Appends all `items` and redraws once.
    pub fn add_items<I: IntoIterator<Item = TableItem>>(&mut self, items: I) {
        for item in items {
            self.add_item(item, true);
        }
        self.draw();
    }

    /// Removes every line and item.
    pub fn delete_all_items(&mut self) {
        self.pad.clear();
        self.draw();
        self.items.clear();
        self.menu = None;
    }

    /// Changes the label of one cell.
    ///
    /// `index` is the item index, `column` a data column. A missing line or
    /// column is logged and ignored. Tags keep their state.
    pub fn cell_changed(&mut self, index: usize, column: usize, text: &str) {
        if let Err(err) = self.change_cell(index, column, text) {
            log::warn!("{err} {text:?}");
        }
    }

    fn change_cell(&mut self, index: usize, column: usize, text: &str) -> Result<(), TableError> {
        let physical = self.columns.physical(column);
        let line = self
            .pad
            .item_line_mut(index)
            .ok_or(TableError::NoSuchLine {
                line: index,
                column,
            })?;
        let cell = line.cell_mut(physical).ok_or(TableError::NoSuchColumn {
            line: index,
            column,
        })?;
        if let PadCell::Text(label) = cell {
            *label = text.to_string();
        }
        if let Some(cell) = self.items.get_mut(index).and_then(|i| i.cell_mut(column)) {
            cell.label = text.to_string();
        }
        self.draw();
        Ok(())
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[TableItem] {
        &self.items
    }

    /// Item with index `index`.
    pub fn item(&self, index: usize) -> Option<&TableItem> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    /// First selected item.
    pub fn selected_item(&self) -> Option<&TableItem> {
        self.items.iter().find(|i| i.selected())
    }

    /// Every selected item.
    pub fn selected_items(&self) -> Vec<&TableItem> {
        self.items.iter().filter(|i| i.selected()).collect()
    }

    pub(super) fn has_checkable_column(&self) -> bool {
        (0..self.header.columns()).any(|c| self.header.checkable(c))
    }

    fn mark_checkable(&self, item: &mut TableItem) {
        for col in 0..item.cell_count() {
            let checkable = self.header.checkable(col);
            if let Some(cell) = item.cell_mut(col) {
                cell.checkable = checkable;
            }
        }
    }

    /// Builds the pad line for `item`, one cell per physical column.
    pub(super) fn build_line(&self, item: &TableItem) -> Line {
        let mut cells = Vec::with_capacity(self.columns.width(self.header.columns()));
        if self.columns.tagged() {
            cells.push(PadCell::Tag(item.selected()));
        }
        for col in 0..self.header.columns() {
            let cell = item.cell(col);
            if self.header.checkable(col) {
                cells.push(PadCell::Tag(cell.is_some_and(|c| c.checked)));
            } else {
                cells.push(PadCell::Text(
                    cell.map(|c| c.label.clone()).unwrap_or_default(),
                ));
            }
        }
        Line::new(cells, item.index())
    }

    /// Rebuilds every line after the columns changed.
    pub(super) fn rebuild_lines(&mut self) {
        let mut items = std::mem::take(&mut self.items);
        for item in &mut items {
            self.mark_checkable(item);
        }
        self.items = items;

        let lines: Vec<Line> = self.items.iter().map(|i| self.build_line(i)).collect();
        let column_selection = self.has_checkable_column();
        self.pad.set_column_selection(column_selection);
        self.pad.replace_lines(lines);
    }

    // -------------------------------------------------------------------------
    // Widget
    // -------------------------------------------------------------------------

    /// Instance id carried by every [`TableEventMsg`](super::TableEventMsg).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Preferred width: the natural table width plus a frame for big lists,
    /// otherwise the default width.
    pub fn preferred_width(&self) -> usize {
        self.preferred_size().width
    }

    /// Preferred height: all lines plus headline and a frame for big lists,
    /// otherwise the default height.
    pub fn preferred_height(&self) -> usize {
        self.preferred_size().height
    }

    fn preferred_size(&self) -> Size {
        if self.big_list {
            let natural = self.pad.table_size();
            Size::new(natural.width + FRAME, natural.height + FRAME)
        } else {
            self.default_size
        }
    }

    /// Resizes the widget.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.size = Size::new(width, height);
        self.sync_viewport();
        self.draw();
    }

    /// Current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the caption shown above the table.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.sync_viewport();
        self.draw();
    }

    /// Caption shown above the table.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Enables or disables the table. A disabled table ignores keys.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.menu = None;
        }
        self.draw();
    }

    /// Whether the table accepts keys.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a big list reports its natural size.
    pub fn big_list(&self) -> bool {
        self.big_list
    }

    /// See [`Model::with_big_list`].
    pub fn set_big_list(&mut self, big_list: bool) {
        self.big_list = big_list;
    }

    /// Jumps to the next row whose first text cell starts with `key`.
    pub fn set_item_by_key(&mut self, key: char) -> bool {
        self.pad.set_item_by_key(key)
    }

    /// Whether the line order is pinned.
    pub fn keep_sorting(&self) -> bool {
        self.pad.keep_sorting()
    }

    /// Pins or unpins the line order.
    pub fn set_keep_sorting(&mut self, keep: bool) {
        self.pad.set_keep_sorting(keep);
    }

    /// Whether key presses report events.
    pub fn notify(&self) -> bool {
        self.notify
    }

    /// Turns event reporting on or off.
    pub fn set_notify(&mut self, notify: bool) {
        self.notify = notify;
    }

    /// Whether cursor moves report selection changes.
    pub fn immediate_mode(&self) -> bool {
        self.immediate_mode
    }

    /// Turns immediate mode on or off. Turning it on also turns on notify.
    pub fn set_immediate_mode(&mut self, immediate: bool) {
        self.immediate_mode = immediate;
        if immediate {
            self.notify = true;
        }
    }

    /// Whether the help line is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Active sort column and direction.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.pad.sort_order()
    }

    /// Whether the sort menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// The open sort menu.
    pub fn menu(&self) -> Option<&menu::Model> {
        self.menu.as_ref()
    }

    /// Read access to the pad.
    pub fn pad(&self) -> &Pad {
        &self.pad
    }

    /// Redraws the pad.
    pub fn draw(&mut self) {
        self.sync_viewport();
        self.pad.draw();
    }

    /// How many times the pad was redrawn.
    pub fn redraw_count(&self) -> usize {
        self.pad.redraw_count()
    }

    /// Rows of the widget not available to data lines.
    pub(super) fn chrome_rows(&self) -> usize {
        usize::from(!self.label.is_empty())
            + usize::from(self.has_headline)
            + usize::from(self.show_help)
    }

    fn sync_viewport(&mut self) {
        let rows = self.size.height.saturating_sub(self.chrome_rows()).max(1);
        self.pad.set_viewport(self.size.width, rows);
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(TableHeader::new(), false)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.menu = None;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
