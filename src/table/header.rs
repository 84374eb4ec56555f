//! Headline construction and header management.
//!
//! The headline is what the pad shows above the rows: one entry per physical
//! column, each carrying an alignment marker and a label. The encoded form
//! handed to the pad is the marker character followed by the label, e.g.
//! `"RSize"` for a right-aligned "Size" column.

use super::error::TableError;
use super::types::{Align, Alignment, ColumnMap, TableHeader};
use super::Model;

/// One headline entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlineColumn {
    /// Alignment marker.
    pub align: Align,
    /// Label without the marker.
    pub label: String,
}

impl HeadlineColumn {
    /// Marker character followed by the label.
    pub fn encoded(&self) -> String {
        let mut s = String::with_capacity(self.label.len() + 1);
        s.push(self.align.marker());
        s.push_str(&self.label);
        s
    }
}

/// The ordered headline entries of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headline {
    columns: Vec<HeadlineColumn>,
}

impl Headline {
    /// `n` left-aligned, unlabelled entries.
    pub fn blank(n: usize) -> Self {
        Self {
            columns: vec![HeadlineColumn::default(); n],
        }
    }

    /// Builds the headline for `header`, with a synthetic leading entry when
    /// `map` is tagged. Alignment is set before the label is appended.
    pub fn build(header: &TableHeader, map: ColumnMap) -> Self {
        let mut headline = Self::blank(map.width(header.columns()));
        for col in 0..header.columns() {
            let physical = map.physical(col);
            headline.set_alignment(physical, header.alignment(col));
            headline.append_label(physical, header.header(col));
        }
        headline
    }

    /// Parses encoded entries. Every entry must start with a valid marker.
    pub fn from_encoded<S: AsRef<str>>(entries: &[S]) -> Result<Self, TableError> {
        let mut columns = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.as_ref();
            let mut chars = entry.chars();
            let align = chars
                .next()
                .and_then(Align::from_marker)
                .ok_or_else(|| {
                    TableError::HeadlineRejected(format!(
                        "column {i} has no alignment marker: {entry:?}"
                    ))
                })?;
            columns.push(HeadlineColumn {
                align,
                label: chars.as_str().to_string(),
            });
        }
        Ok(Self { columns })
    }

    /// Stores the marker for physical column `col`. Out-of-range columns are
    /// ignored.
    pub fn set_alignment(&mut self, col: usize, al: Alignment) {
        if let Some(c) = self.columns.get_mut(col) {
            c.align = Align::from(al);
        }
    }

    /// Appends `text` to the label of physical column `col`.
    pub fn append_label(&mut self, col: usize, text: &str) {
        if let Some(c) = self.columns.get_mut(col) {
            c.label.push_str(text);
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Entry for physical column `col`.
    pub fn get(&self, col: usize) -> Option<&HeadlineColumn> {
        self.columns.get(col)
    }

    /// All entries.
    pub fn columns(&self) -> &[HeadlineColumn] {
        &self.columns
    }

    /// Labels with the marker stripped.
    pub fn labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    /// Encoded entries (marker + label).
    pub fn encoded(&self) -> Vec<String> {
        self.columns.iter().map(HeadlineColumn::encoded).collect()
    }

    /// Whether any entry has a non-empty label.
    pub fn has_content(&self) -> bool {
        self.columns.iter().any(|c| !c.label.is_empty())
    }
}

impl Model {
    /// Replaces all column headers at once.
    ///
    /// The column spec is rebuilt from `labels`. Alignment goes back to left
    /// for every column and no column stays checkable, since labels carry
    /// neither. Existing rows are rebuilt to the new column count.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_table::table::{Model, TableHeader};
    ///
    /// let mut table = Model::new(TableHeader::from_labels(&["A", "B"]), false);
    /// table.set_header(&["Name", "Size", "Date"]).unwrap();
    /// assert_eq!(table.header(), vec!["Name", "Size", "Date"]);
    /// ```
    pub fn set_header<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<(), TableError> {
        self.header = TableHeader::from_labels(labels);
        self.headline = Headline::build(&self.header, self.columns);
        self.install_headline()?;
        self.rebuild_lines();
        self.draw();
        Ok(())
    }

    /// Column labels with the alignment marker removed.
    ///
    /// The synthetic selection column of a multi-selection table is not
    /// included.
    pub fn header(&self) -> Vec<String> {
        self.headline
            .columns()
            .iter()
            .skip(self.columns.offset())
            .map(|c| c.label.clone())
            .collect()
    }

    /// The encoded headline as installed in the pad, synthetic column
    /// included.
    pub fn encoded_headline(&self) -> Vec<String> {
        self.headline.encoded()
    }

    /// Alignment markers of every physical column.
    pub fn headline_markers(&self) -> Vec<char> {
        self.headline
            .columns()
            .iter()
            .map(|c| c.align.marker())
            .collect()
    }

    /// Sets the alignment of logical column `col` and reinstalls the
    /// headline.
    pub fn set_alignment(&mut self, col: usize, al: Alignment) {
        self.headline.set_alignment(self.columns.physical(col), al);
        if let Err(err) = self.install_headline() {
            log::warn!("alignment of column {col} not applied: {err}");
        }
    }

    /// Whether the pad accepted a headline with at least one label.
    pub fn has_headline(&self) -> bool {
        self.has_headline
    }

    /// The caller-facing column spec.
    pub fn table_header(&self) -> &TableHeader {
        &self.header
    }

    /// Number of data columns.
    pub fn columns(&self) -> usize {
        self.header.columns()
    }

    /// Whether logical column `col` is checkable.
    pub fn checkable(&self, col: usize) -> bool {
        self.header.checkable(col)
    }

    /// Whether physical column `col` holds checkable data cells. The
    /// synthetic selection column does not.
    pub(super) fn checkable_physical(&self, col: usize) -> bool {
        self.columns.logical(col).is_some_and(|c| self.checkable(c))
    }

    pub(super) fn install_headline(&mut self) -> Result<(), TableError> {
        self.has_headline = self.pad.set_headline(&self.headline.encoded())?;
        Ok(())
    }
}
