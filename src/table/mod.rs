//! Scrollable, sortable multi-column table component.
//!
//! The table owns its column header, its items and the [`Pad`] that lays the
//! items out as lines. Keyboard input moves the cursor, toggles checkable
//! cells, and opens a sort menu. What a key press means to the application
//! comes back as a [`TableEvent`].
//!
//! ## Selection modes
//!
//! - **Single selection**: the highlighted row is the selected row. Moving
//!   the cursor selects the new row.
//! - **Multi selection**: a synthetic `[x]` column is put in front of the
//!   data columns. Toggling it selects or deselects its row.
//!
//! Either mode can have checkable data columns. Their cells render as tags
//! and `ctrl+n` / `ctrl+p` jump between them.
//!
//! ## Basic usage
//!
//! ```rust
//! use bubbletea_table::table::{Alignment, ColumnSpec, Model, TableHeader, TableItem};
//!
//! let header = TableHeader::new()
//!     .column("Name")
//!     .with(ColumnSpec::new("Size").align(Alignment::End));
//! let mut table = Model::new(header, false);
//! table.add_items(vec![
//!     TableItem::new(&["bash", "1024"]),
//!     TableItem::new(&["zsh", "2048"]).with_selected(true),
//! ]);
//!
//! assert_eq!(table.header(), vec!["Name", "Size"]);
//! assert_eq!(table.current_item(), Some(1));
//! ```
//!
//! ## Inside a bubbletea-rs program
//!
//! Forward messages to [`Model::update`]. Key presses that produce an event
//! come back as a [`TableEventMsg`] carrying the table's [`Model::id`].
//!
//! ```rust
//! use bubbletea_table::table::{Model, TableEvent, TableEventMsg};
//! use bubbletea_rs::{Cmd, Msg};
//!
//! fn route(table: &mut Model, msg: Msg) -> Option<Cmd> {
//!     if let Some(ev) = msg.downcast_ref::<TableEventMsg>() {
//!         if ev.id == table.id() && ev.event == TableEvent::Activated {
//!             // open the current item
//!         }
//!         return None;
//!     }
//!     table.update(msg)
//! }
//! ```

mod error;
mod header;
mod input;
mod keys;
mod model;
mod pad;
mod rendering;
mod selection;
mod sort;
mod style;
mod types;

#[cfg(test)]
mod tests;

pub use error::TableError;
pub use header::{Headline, HeadlineColumn};
pub use keys::TableKeyMap;
pub use model::{Model, DEFAULT_SIZE};
pub use pad::{Pad, PadMotion, Position, COLUMN_GAP, TAG_WIDTH};
pub use sort::{LexicalSort, NumericSort, SortOrder, SortStrategy};
pub use style::{TableStyles, TAG_OFF, TAG_ON};
pub use types::{
    Align, Alignment, Cell, ColumnMap, ColumnSpec, Line, PadCell, Size, TableEvent,
    TableEventMsg, TableHeader, TableItem,
};

pub(crate) use pad::display_width;
