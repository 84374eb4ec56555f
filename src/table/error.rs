//! Error type for table operations.

use thiserror::Error;

/// Errors raised by table and pad operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The addressed line does not exist.
    #[error("no such line: {line}/{column}")]
    NoSuchLine {
        /// Line index.
        line: usize,
        /// Column that was addressed.
        column: usize,
    },
    /// The line exists but has no such column.
    #[error("no such column: {line}/{column}")]
    NoSuchColumn {
        /// Line index.
        line: usize,
        /// Column that was addressed.
        column: usize,
    },
    /// The pad refused the headline.
    #[error("headline rejected: {0}")]
    HeadlineRejected(String),
    /// No item has this index.
    #[error("no such item: {0}")]
    NoSuchItem(usize),
}
