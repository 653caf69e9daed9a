//! Grid components rendered from a [`Table`](crate::table::Table).

mod data_table;
mod events;
pub mod pagination;

pub use data_table::DataTable;
pub use events::GridEvent;
pub use pagination::{PaginationAction, PAGE_SIZE_OPTIONS};
