#![warn(missing_docs)]

//! # bubbletea-table
//!
//! A scrollable, sortable, multi-column table component for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! The table follows the Elm Architecture: forward messages to
//! [`table::Model::update`] and draw it with [`table::Model::view`]. Key
//! presses that matter to the application come back as
//! [`table::TableEventMsg`] values.
//!
//! ## Features
//!
//! - **Single or multi selection**, the latter with a synthetic `[x]` column
//! - **Checkable columns** whose cells render as toggleable tags
//! - **Sort menu** (`ctrl+o`) ordering the rows by any column
//! - **Type-ahead**: a letter jumps to the next row starting with it
//! - **Theming** through [`table::TableStyles`] and rebindable keys through
//!   [`table::TableKeyMap`]
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_table::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     table: Table,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let header = TableHeader::new()
//!             .column("Package")
//!             .with(ColumnSpec::new("Version").align(Alignment::End));
//!         let mut table = Table::new(header, false).with_notify(true);
//!         table.add_items(vec![
//!             TableItem::new(&["bash", "5.2"]),
//!             TableItem::new(&["zsh", "5.9"]),
//!         ]);
//!         table.focus();
//!         (Self { table }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(ev) = msg.downcast_ref::<TableEventMsg>() {
//!             if ev.event == TableEvent::Activated {
//!                 // act on self.table.current_item()
//!             }
//!             return None;
//!         }
//!         self.table.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.table.view()
//!     }
//! }
//! ```

pub mod key;
pub mod menu;
pub mod table;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
///
/// A focused component reacts to key messages; a blurred one ignores them.
///
/// ```rust
/// use bubbletea_table::prelude::*;
///
/// let mut table = Table::default();
/// assert!(!table.focused());
/// table.focus();
/// assert!(table.focused());
/// table.blur();
/// assert!(!table.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use menu::{MenuItem, MenuKeyMap, MenuOutcome, MenuStyles, Model as Menu};
pub use table::Model as Table;
pub use table::{
    Alignment, Cell, ColumnSpec, SortStrategy, TableError, TableEvent, TableEventMsg,
    TableHeader, TableItem, TableKeyMap, TableStyles,
};

/// Commonly used types in one import.
///
/// ```rust
/// use bubbletea_table::prelude::*;
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap};
    pub use crate::menu::Model as Menu;
    pub use crate::table::{
        Alignment, Cell, ColumnSpec, LexicalSort, NumericSort, SortStrategy, TableError,
        TableEvent, TableEventMsg, TableHeader, TableItem, TableKeyMap, TableStyles,
    };
    pub use crate::Component;
    pub use crate::Table;
}
