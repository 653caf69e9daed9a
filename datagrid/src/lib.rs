//! Headless data grid.
//!
//! - [`table`]: the table engine (row and header models, pagination, row
//!   selection, column pinning, column sizing and resizing).
//! - [`styles`]: inline style of pinned and unpinned columns.
//! - [`components`]: the [`DataTable`](components::DataTable) grid and its
//!   pagination control, rendered to a [`tabledom`] element tree.

pub mod components;
pub mod config;
pub mod error;
pub mod prelude;
pub mod state;
pub mod styles;
pub mod table;

pub use components::{DataTable, GridEvent, PaginationAction};
pub use config::DataTableConfig;
pub use error::GridError;
pub use state::State;
pub use styles::column_style;
pub use tabledom;
pub use tabledom::to_html;
