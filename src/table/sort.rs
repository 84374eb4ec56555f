//! Sort strategies used by the pad when the user picks a sort column.

use super::types::PadCell;
use std::cmp::Ordering;

/// Orders two cells of the same column.
pub trait SortStrategy: Send + Sync {
    /// Compares `a` with `b` in ascending order.
    fn compare(&self, a: &PadCell, b: &PadCell) -> Ordering;
}

/// Plain string ordering. Tags sort unchecked first and after all text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSort;

impl SortStrategy for LexicalSort {
    fn compare(&self, a: &PadCell, b: &PadCell) -> Ordering {
        match (a, b) {
            (PadCell::Text(x), PadCell::Text(y)) => x.cmp(y),
            (PadCell::Tag(x), PadCell::Tag(y)) => x.cmp(y),
            (PadCell::Text(_), PadCell::Tag(_)) => Ordering::Less,
            (PadCell::Tag(_), PadCell::Text(_)) => Ordering::Greater,
        }
    }
}

/// Orders text that parses as a number numerically, everything else like
/// [`LexicalSort`]. Numbers sort before non-numeric text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericSort;

impl SortStrategy for NumericSort {
    fn compare(&self, a: &PadCell, b: &PadCell) -> Ordering {
        if let (PadCell::Text(x), PadCell::Text(y)) = (a, b) {
            match (x.trim().parse::<f64>(), y.trim().parse::<f64>()) {
                (Ok(x), Ok(y)) => return x.total_cmp(&y),
                (Ok(_), Err(_)) => return Ordering::Less,
                (Err(_), Ok(_)) => return Ordering::Greater,
                (Err(_), Err(_)) => {}
            }
        }
        LexicalSort.compare(a, b)
    }
}

/// Where the pad currently sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Physical column.
    pub column: usize,
    /// Descending when true.
    pub descending: bool,
}
