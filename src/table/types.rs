//! Core types for the table component.
//!
//! This module contains the data the table is built from and the data it
//! builds:
//! - [`TableHeader`] / [`ColumnSpec`]: the caller's column description
//! - [`TableItem`] / [`Cell`]: caller rows, owned by the table once added
//! - [`Line`] / [`PadCell`]: the rendered form of a row inside the pad
//! - [`ColumnMap`]: logical (data) to physical (rendered) column translation
//! - [`TableEvent`]: what a key press means to the surrounding application

/// Alignment requested for a column in the header spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Keep the default (left).
    #[default]
    Unchanged,
    /// Align to the start of the cell.
    Begin,
    /// Center within the cell.
    Center,
    /// Align to the end of the cell.
    End,
}

/// Alignment as stored in the headline.
///
/// Each variant is encoded as a one-character marker in front of the label,
/// see [`Align::marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Marker `L`.
    #[default]
    Left,
    /// Marker `C`.
    Center,
    /// Marker `R`.
    Right,
}

impl Align {
    /// The marker character stored in front of a headline label.
    pub fn marker(self) -> char {
        match self {
            Align::Left => 'L',
            Align::Center => 'C',
            Align::Right => 'R',
        }
    }

    /// Parses a marker character back into an alignment.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'L' => Some(Align::Left),
            'C' => Some(Align::Center),
            'R' => Some(Align::Right),
            _ => None,
        }
    }
}

impl From<Alignment> for Align {
    fn from(al: Alignment) -> Self {
        match al {
            Alignment::Unchanged | Alignment::Begin => Align::Left,
            Alignment::Center => Align::Center,
            Alignment::End => Align::Right,
        }
    }
}

/// One column of a [`TableHeader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header label.
    pub label: String,
    /// Requested alignment.
    pub alignment: Alignment,
    /// Whether cells of this column render as toggleable tags.
    pub checkable: bool,
}

impl ColumnSpec {
    /// A left-aligned, non-checkable column.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            alignment: Alignment::Unchanged,
            checkable: false,
        }
    }

    /// Sets the alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Marks the column checkable.
    pub fn checkable(mut self) -> Self {
        self.checkable = true;
        self
    }
}

/// The caller's description of the table columns.
///
/// # Examples
///
/// ```
/// use bubbletea_table::table::{Alignment, ColumnSpec, TableHeader};
///
/// let header = TableHeader::new()
///     .column("Name")
///     .with(ColumnSpec::new("Size").align(Alignment::End))
///     .with(ColumnSpec::new("Keep").checkable());
/// assert_eq!(header.columns(), 3);
/// assert!(header.checkable(2));
/// assert!(!header.has_column(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableHeader {
    columns: Vec<ColumnSpec>,
}

impl TableHeader {
    /// An empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// A header of plain left-aligned columns.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            columns: labels.iter().map(|l| ColumnSpec::new(l.as_ref())).collect(),
        }
    }

    /// Appends a plain column.
    pub fn column(self, label: impl Into<String>) -> Self {
        self.with(ColumnSpec::new(label))
    }

    /// Appends a column spec.
    pub fn with(mut self, spec: ColumnSpec) -> Self {
        self.columns.push(spec);
        self
    }

    /// Appends a column spec in place.
    pub fn add_column(&mut self, spec: ColumnSpec) {
        self.columns.push(spec);
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether `col` names an existing column.
    pub fn has_column(&self, col: usize) -> bool {
        col < self.columns.len()
    }

    /// Label of column `col`, empty if out of range.
    pub fn header(&self, col: usize) -> &str {
        self.columns.get(col).map_or("", |c| c.label.as_str())
    }

    /// Alignment of column `col`, `Unchanged` if out of range.
    pub fn alignment(&self, col: usize) -> Alignment {
        self.columns.get(col).map_or(Alignment::Unchanged, |c| c.alignment)
    }

    /// Whether column `col` is checkable. Out-of-range columns are not.
    pub fn checkable(&self, col: usize) -> bool {
        self.columns.get(col).is_some_and(|c| c.checkable)
    }

    /// All column specs.
    pub fn specs(&self) -> &[ColumnSpec] {
        &self.columns
    }
}

/// One cell of a caller row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Text shown in a plain cell.
    pub label: String,
    /// Checked state used when the cell sits in a checkable column.
    pub checked: bool,
    /// Set by the table when the cell's column is checkable.
    pub checkable: bool,
}

impl Cell {
    /// A plain cell.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// A caller row.
///
/// Once added, the table owns its items. The table assigns `index` in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableItem {
    cells: Vec<Cell>,
    index: usize,
    selected: bool,
}

impl TableItem {
    /// Builds an item from cell labels.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            cells: labels.iter().map(|l| Cell::new(l.as_ref())).collect(),
            index: 0,
            selected: false,
        }
    }

    /// Builds an item from prepared cells.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            index: 0,
            selected: false,
        }
    }

    /// Marks the item as initially selected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The item's cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at logical column `col`.
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub(super) fn cell_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Label of the first cell, used in log lines.
    pub fn label(&self) -> &str {
        self.cells.first().map_or("", |c| c.label.as_str())
    }

    /// Position in the table's item collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(super) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Whether the row is selected.
    pub fn selected(&self) -> bool {
        self.selected
    }

    pub(super) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// A cell as stored in the pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PadCell {
    /// Plain text.
    Text(String),
    /// Checkbox state.
    Tag(bool),
}

impl PadCell {
    /// Text of a plain cell, `None` for tags.
    pub fn text(&self) -> Option<&str> {
        match self {
            PadCell::Text(s) => Some(s),
            PadCell::Tag(_) => None,
        }
    }

    /// State of a tag cell, `None` for text.
    pub fn tagged(&self) -> Option<bool> {
        match self {
            PadCell::Tag(on) => Some(*on),
            PadCell::Text(_) => None,
        }
    }
}

/// One rendered row in the pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<PadCell>,
    item: usize,
}

impl Line {
    /// Builds a line for the item at `item`.
    pub fn new(cells: Vec<PadCell>, item: usize) -> Self {
        Self { cells, item }
    }

    /// Index of the item this line was built from.
    pub fn item_index(&self) -> usize {
        self.item
    }

    /// Cells in physical column order.
    pub fn cells(&self) -> &[PadCell] {
        &self.cells
    }

    /// Cell at physical column `col`.
    pub fn cell(&self, col: usize) -> Option<&PadCell> {
        self.cells.get(col)
    }

    /// Mutable cell at physical column `col`.
    pub fn cell_mut(&mut self, col: usize) -> Option<&mut PadCell> {
        self.cells.get_mut(col)
    }

    /// Sets the state of the tag at `col`. Text cells are left alone.
    pub fn set_tag(&mut self, col: usize, on: bool) {
        if let Some(PadCell::Tag(state)) = self.cells.get_mut(col) {
            *state = on;
        }
    }
}

/// Translation between logical columns (the data model) and physical
/// columns (the pad), accounting for the synthetic tag column that
/// multi-selection puts in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    tagged: bool,
}

impl ColumnMap {
    /// Map for a table with (`true`) or without a leading tag column.
    pub fn new(tagged: bool) -> Self {
        Self { tagged }
    }

    /// Whether there is a synthetic leading tag column.
    pub fn tagged(self) -> bool {
        self.tagged
    }

    /// Number of synthetic columns in front of the data.
    pub fn offset(self) -> usize {
        usize::from(self.tagged)
    }

    /// Physical column of logical column `logical`.
    pub fn physical(self, logical: usize) -> usize {
        logical + self.offset()
    }

    /// Logical column of physical column `physical`. `None` for the tag column.
    pub fn logical(self, physical: usize) -> Option<usize> {
        physical.checked_sub(self.offset())
    }

    /// Whether `physical` is the synthetic tag column.
    pub fn is_tag_column(self, physical: usize) -> bool {
        self.tagged && physical == 0
    }

    /// Physical width of a table with `logical` data columns.
    pub fn width(self, logical: usize) -> usize {
        logical + self.offset()
    }
}

/// Result of a key press on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableEvent {
    /// Nothing to report.
    #[default]
    None,
    /// A checkable cell changed value.
    ValueChanged,
    /// The current row was activated.
    Activated,
    /// The highlighted row changed.
    SelectionChanged,
}

/// Message emitted by [`Model`](super::Model) when a key press produced an
/// event. `id` identifies the table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEventMsg {
    /// Id of the table that produced the event.
    pub id: usize,
    /// The event.
    pub event: TableEvent,
}

/// Width and height in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl Size {
    /// Builds a size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_mapping() {
        assert_eq!(Align::from(Alignment::Unchanged).marker(), 'L');
        assert_eq!(Align::from(Alignment::Begin).marker(), 'L');
        assert_eq!(Align::from(Alignment::Center).marker(), 'C');
        assert_eq!(Align::from(Alignment::End).marker(), 'R');
        assert_eq!(Align::from_marker('C'), Some(Align::Center));
        assert_eq!(Align::from_marker('x'), None);
    }

    #[test]
    fn test_column_map_round_trip() {
        let plain = ColumnMap::new(false);
        assert_eq!(plain.physical(0), 0);
        assert_eq!(plain.logical(0), Some(0));
        assert!(!plain.is_tag_column(0));

        let tagged = ColumnMap::new(true);
        assert_eq!(tagged.physical(0), 1);
        assert_eq!(tagged.logical(0), None);
        assert_eq!(tagged.logical(2), Some(1));
        assert!(tagged.is_tag_column(0));
        assert_eq!(tagged.width(2), 3);
    }

    #[test]
    fn test_header_out_of_range_queries() {
        let header = TableHeader::from_labels(&["A"]);
        assert_eq!(header.header(5), "");
        assert_eq!(header.alignment(5), Alignment::Unchanged);
        assert!(!header.checkable(5));
    }
}
