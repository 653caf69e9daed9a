//! Common imports for building a grid.
//!
//! ```
//! use datagrid::prelude::*;
//! ```

pub use crate::components::{DataTable, GridEvent, PaginationAction};
pub use crate::config::DataTableConfig;
pub use crate::error::GridError;
pub use crate::state::State;
pub use crate::styles::column_style;
pub use crate::table::{
    CellContext, Column, ColumnDef, ColumnPinningState, ColumnResizeMode, HeaderContext, PinSide,
    ResizeInput, RowSelectionState, Section, Table, TableConfig, TableOptions,
};
pub use tabledom::{Element, Style};
