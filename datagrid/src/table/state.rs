//! Table state slices.
//!
//! Each slice can live in the table's internal state cell or be controlled
//! by the host (see [`Controlled`](super::Controlled)).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Row id → selected. Only `true` entries are ever written.
pub type RowSelectionState = BTreeMap<String, bool>;

/// Column id → width override in pixels.
pub type ColumnSizingState = BTreeMap<String, f64>;

/// The side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

/// Ordered ids of the columns pinned to each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnPinningState {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl ColumnPinningState {
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            left: left.into_iter().map(Into::into).collect(),
            right: right.into_iter().map(Into::into).collect(),
        }
    }

    pub fn side(&self, side: PinSide) -> &[String] {
        match side {
            PinSide::Left => &self.left,
            PinSide::Right => &self.right,
        }
    }

    /// Which side `id` is pinned to, if any.
    pub fn side_of(&self, id: &str) -> Option<PinSide> {
        if self.left.iter().any(|c| c == id) {
            Some(PinSide::Left)
        } else if self.right.iter().any(|c| c == id) {
            Some(PinSide::Right)
        } else {
            None
        }
    }

    /// The first id listed on both sides, if any.
    pub fn overlap(&self) -> Option<&str> {
        self.left
            .iter()
            .find(|id| self.right.contains(*id))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// An in-flight column resize gesture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSizingInfo {
    /// Pointer x where the gesture started.
    pub start_offset: Option<f64>,
    /// Size of the dragged header when the gesture started.
    pub start_size: Option<f64>,
    pub delta_offset: Option<f64>,
    pub delta_percentage: Option<f64>,
    /// Id of the column being resized, `None` when idle.
    pub is_resizing_column: Option<String>,
    /// Leaf column sizes captured at the start of the gesture.
    pub column_sizing_start: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
        }
    }
}

/// Everything the table engine tracks between renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    pub row_selection: RowSelectionState,
    pub column_pinning: ColumnPinningState,
    pub column_sizing: ColumnSizingState,
    pub column_sizing_info: ColumnSizingInfo,
    pub pagination: PaginationState,
}
