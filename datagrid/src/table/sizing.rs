//! Column sizing and the resize gesture.

use super::column::{Column, Section};
use super::header::Header;
use super::options::{ColumnResizeDirection, ColumnResizeMode};
use super::state::{ColumnSizingInfo, ColumnSizingState};
use super::Table;

/// Lower bound on the relative size change of one gesture, so a drag can
/// shrink a column towards zero but never invert it.
const MIN_DELTA_PERCENTAGE: f64 = -0.999_999;

impl<T> Table<T> {
    /// Resolved width of a leaf node: the override or the configured size,
    /// clamped to the column's bounds.
    fn leaf_size(&self, node: usize) -> f64 {
        let def = self.def(node);
        let defaults = self.config().default_column;
        let min = def.min_size.unwrap_or(defaults.min_size);
        let max = def.max_size.unwrap_or(defaults.max_size);
        let size = self
            .with_state(|s| s.column_sizing.get(&self.nodes[node].id).copied())
            .unwrap_or_else(|| def.size.unwrap_or(defaults.size));
        size.max(min).min(max)
    }

    fn sum_sizes(&self, nodes: &[usize]) -> f64 {
        nodes.iter().map(|&node| self.leaf_size(node)).sum()
    }

    /// Width of the whole table.
    pub fn total_size(&self) -> f64 {
        self.sum_sizes(&self.visible_leaf_nodes())
    }

    pub fn left_total_size(&self) -> f64 {
        self.sum_sizes(&self.section_leaves(Section::Left))
    }

    pub fn center_total_size(&self) -> f64 {
        self.sum_sizes(&self.section_leaves(Section::Center))
    }

    pub fn right_total_size(&self) -> f64 {
        self.sum_sizes(&self.section_leaves(Section::Right))
    }

    pub fn reset_column_sizing(&self) {
        self.set_column_sizing(ColumnSizingState::new());
    }

    /// Advance the active resize gesture to pointer position `client_x`.
    pub fn resize_move(&self, client_x: f64) {
        self.update_resize(client_x, false);
    }

    /// Finish the active resize gesture at pointer position `client_x`.
    pub fn resize_end(&self, client_x: f64) {
        if self.update_resize(client_x, true) {
            self.set_column_sizing_info(ColumnSizingInfo::default());
        }
    }

    /// Returns false when no gesture is active.
    fn update_resize(&self, client_x: f64, is_end: bool) -> bool {
        let mut info = self.with_state(|s| s.column_sizing_info.clone());
        let Some(column_id) = info.is_resizing_column.clone() else {
            return false;
        };

        let direction = match self.config().column_resize_direction {
            ColumnResizeDirection::Ltr => 1.0,
            ColumnResizeDirection::Rtl => -1.0,
        };
        let delta_offset = (client_x - info.start_offset.unwrap_or(0.0)) * direction;
        let start_size = info.start_size.unwrap_or(0.0);
        let delta_percentage = if start_size > 0.0 {
            (delta_offset / start_size).max(MIN_DELTA_PERCENTAGE)
        } else {
            0.0
        };

        let new_sizes: Vec<(String, f64)> = info
            .column_sizing_start
            .iter()
            .map(|(id, size)| {
                let resized = (size + size * delta_percentage).max(0.0);
                (id.clone(), (resized * 100.0).round() / 100.0)
            })
            .collect();

        info.delta_offset = Some(delta_offset);
        info.delta_percentage = Some(delta_percentage);
        self.set_column_sizing_info(info);

        if self.config().column_resize_mode == ColumnResizeMode::OnChange || is_end {
            log::debug!("resize '{column_id}' by {delta_offset}px -> {new_sizes:?}");
            let mut sizing = self.with_state(|s| s.column_sizing.clone());
            sizing.extend(new_sizes);
            self.set_column_sizing(sizing);
        }
        true
    }
}

impl<T> Column<'_, T> {
    /// Current width. A group column is as wide as its leaves combined.
    pub fn size(&self) -> f64 {
        self.table.sum_sizes(self.leaf_nodes())
    }

    /// Offset of this column from the start of `section`: the combined width
    /// of the section's leaves before it. Zero when the column is not laid
    /// out in that section.
    pub fn start(&self, section: Section) -> f64 {
        let leaves = self.table.section_leaves(section);
        let first = self.leaf_nodes().first().copied();
        match leaves.iter().position(|&node| Some(node) == first) {
            Some(index) => self.table.sum_sizes(&leaves[..index]),
            None => 0.0,
        }
    }

    /// Combined width of the leaves after this column in `section`.
    pub fn after(&self, section: Section) -> f64 {
        let leaves = self.table.section_leaves(section);
        let last = self.leaf_nodes().last().copied();
        match leaves.iter().position(|&node| Some(node) == last) {
            Some(index) => self.table.sum_sizes(&leaves[index + 1..]),
            None => 0.0,
        }
    }

    pub fn is_first_column(&self, section: Section) -> bool {
        let leaves = self.table.section_leaves(section);
        !leaves.is_empty() && leaves.first() == self.leaf_nodes().first()
    }

    pub fn is_last_column(&self, section: Section) -> bool {
        let leaves = self.table.section_leaves(section);
        !leaves.is_empty() && leaves.last() == self.leaf_nodes().last()
    }

    pub fn can_resize(&self) -> bool {
        self.table.config().enable_column_resizing && self.def().enable_resizing
    }

    pub fn is_resizing(&self) -> bool {
        let id = self.id();
        self.table
            .with_state(|s| s.column_sizing_info.is_resizing_column.as_deref() == Some(id))
    }

    /// Drop any width override so the column returns to its configured size.
    pub fn reset_size(&self) {
        let mut sizing = self.table.with_state(|s| s.column_sizing.clone());
        sizing.remove(self.id());
        for leaf in self.leaf_columns() {
            sizing.remove(leaf.id());
        }
        log::debug!("reset size of '{}'", self.id());
        self.table.set_column_sizing(sizing);
    }
}

impl<'t, T> Header<'t, T> {
    /// Width of this header: the combined width of the leaves it spans.
    pub fn size(&self) -> f64 {
        self.table.sum_sizes(&self.leaves)
    }

    /// Offset of this header from the start of its section.
    pub fn start(&self) -> f64 {
        let leaves = self.table.section_leaves(self.section);
        let end = self.leaf_offset.min(leaves.len());
        self.table.sum_sizes(&leaves[..end])
    }

    pub fn resize_handler(&self) -> ResizeHandler<'t, T> {
        ResizeHandler {
            table: self.table,
            column: self.column(),
            leaves: self.leaves.clone(),
        }
    }
}

/// Where a resize gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeInput {
    Pointer { client_x: f64 },
    /// The x position of every active touch point.
    Touch { touches: Vec<f64> },
}

/// Begins resize gestures for one header.
///
/// After [`start`](Self::start), forward pointer movement to
/// [`Table::resize_move`] and the release to [`Table::resize_end`].
pub struct ResizeHandler<'t, T> {
    table: &'t Table<T>,
    column: Column<'t, T>,
    leaves: Vec<usize>,
}

impl<T> ResizeHandler<'_, T> {
    /// Record the start of a gesture. Returns false when the column cannot
    /// be resized or the input does not start a gesture (a multi-touch start).
    pub fn start(&self, input: ResizeInput) -> bool {
        if !self.column.can_resize() {
            return false;
        }

        let client_x = match input {
            ResizeInput::Pointer { client_x } => client_x,
            ResizeInput::Touch { touches } => match touches.as_slice() {
                [x] => x.round(),
                [] => return false,
                _ => {
                    log::warn!(
                        "ignoring {}-finger resize of '{}'",
                        touches.len(),
                        self.column.id()
                    );
                    return false;
                }
            },
        };

        let column_sizing_start: Vec<(String, f64)> = self
            .leaves
            .iter()
            .map(|&node| {
                (
                    self.table.nodes[node].id.clone(),
                    self.table.leaf_size(node),
                )
            })
            .collect();

        log::debug!("resize start on '{}' at x={client_x}", self.column.id());
        self.table.set_column_sizing_info(ColumnSizingInfo {
            start_offset: Some(client_x),
            start_size: Some(self.table.sum_sizes(&self.leaves)),
            delta_offset: Some(0.0),
            delta_percentage: Some(0.0),
            is_resizing_column: Some(self.column.id().to_string()),
            column_sizing_start,
        });
        true
    }
}
