//! # Tracker Table
//!
//! Client-side table behaviour for the AAA Performance Tracker pages: click-to-sort
//! headers, live row search, and a couple of display formatting helpers.
//!
//! ## Features
//!
//! - **Type-aware sorting**: currency and scores sort numerically, `MM/DD/YYYY`,
//!   `YYYY-MM-DD` and `Month DD, YYYY` values chronologically, everything else as
//!   natural text (`Item 2` before `Item 10`)
//! - **Badge precedence**: a cell's badge text is compared instead of its full text
//! - **Toggle state**: clicking the active column flips direction, any other column
//!   sorts ascending; one header carries the active indicator at a time
//! - **Rendering agnostic**: the page is reached through [`RenderingSurface`];
//!   [`Table`] is an in-memory implementation
//! - **Explicit state**: [`SortDispatcher`] keeps one [`SortState`] per [`TableId`]
//!
//! ## Usage
//!
//! ```rust
//! use tracker_table::{SortCommand, SortDispatcher, Table};
//!
//! let mut table = Table::from_texts(
//!     "reports",
//!     ["Name", "Score", "Actions"],
//!     [["Cara", "$1,200", "edit"], ["Abe", "$45", "edit"]],
//! );
//! let mut dispatcher = SortDispatcher::default();
//! dispatcher.register(&mut table);
//!
//! let command = SortCommand::new(table.id().clone(), 1);
//! dispatcher.dispatch(&mut table, &command).unwrap();
//! assert_eq!(table.column_values(1), vec![Some("$45"), Some("$1,200")]);
//! ```
mod config;
mod dispatch;
mod error;
mod format;
mod helpers;
mod search;
mod sorter;
mod surface;
mod table;

pub use crate::config::{Classification, ConfigError, IndicatorStyle, SortConfig};
pub use crate::dispatch::{DispatchError, SortCommand, SortDispatcher};
pub use crate::error::{Result, TrackerTableError};
pub use crate::format::{format_rating, generate_colors, FormatError};
pub use crate::search::filter_rows;
pub use crate::sorter::{Direction, SortState, TableSorter};
pub use crate::surface::RenderingSurface;
pub use crate::table::{Cell, ColumnHeader, Indicator, Row, Table, TableId};
