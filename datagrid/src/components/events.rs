//! UI events the grid reacts to.

use crate::components::pagination::PaginationAction;
use crate::table::{PinSide, ResizeInput};

/// An interaction with a rendered [`DataTable`](super::DataTable).
///
/// Rendered elements carry the ids an event needs: resize affordances have
/// `data-header-id`, selection checkboxes and body rows have `data-row-id`.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Pointer-down or touch-start on a header's resize affordance.
    ResizeStart { header_id: String, input: ResizeInput },
    /// Pointer or touch movement while a resize is in progress.
    ResizeMove { client_x: f64 },
    /// Pointer-up or touch-end while a resize is in progress.
    ResizeEnd { client_x: f64 },
    /// Double-click on a header's resize affordance.
    ResetSize { header_id: String },
    ToggleRow { row_id: String },
    ToggleAllPageRows,
    Pin {
        column_id: String,
        side: Option<PinSide>,
    },
    Paginate(PaginationAction),
}
