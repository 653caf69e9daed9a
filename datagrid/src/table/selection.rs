//! Row selection.
//!
//! With multi-row selection disabled the selection holds at most one row:
//! selecting a row clears every other entry first, and the bulk "select all"
//! operations can only clear.

use super::row::Row;
use super::state::RowSelectionState;
use super::Table;

impl<T> Row<'_, T> {
    pub fn is_selected(&self) -> bool {
        self.table
            .with_row_selection(|selection| selection.get(self.id).copied().unwrap_or(false))
    }

    pub fn can_select(&self) -> bool {
        self.table.config().enable_row_selection
    }

    pub fn can_multi_select(&self) -> bool {
        self.table.config().enable_multi_row_selection
    }

    /// Toggle this row, or force it to `value`.
    pub fn toggle_selected(&self, value: Option<bool>) {
        let is_selected = self.is_selected();
        let value = value.unwrap_or(!is_selected);
        if self.can_select() && is_selected == value {
            return;
        }

        let mut next = self.table.with_row_selection(Clone::clone);
        if value {
            if !self.can_multi_select() {
                next.clear();
            }
            if self.can_select() {
                next.insert(self.id.to_string(), true);
            }
        } else {
            next.remove(self.id);
        }
        self.table.set_row_selection(next);
    }
}

impl<T> Table<T> {
    /// Rows of the full data set that are selected.
    pub fn selected_row_model(&self) -> Vec<Row<'_, T>> {
        self.core_row_model()
            .into_iter()
            .filter(Row::is_selected)
            .collect()
    }

    pub fn selected_row_count(&self) -> usize {
        self.selected_row_model().len()
    }

    pub fn is_all_rows_selected(&self) -> bool {
        let rows = self.core_row_model();
        !rows.is_empty() && rows.iter().all(Row::is_selected)
    }

    pub fn is_some_rows_selected(&self) -> bool {
        let count = self.selected_row_count();
        count > 0 && count < self.core_row_model().len()
    }

    pub fn is_all_page_rows_selected(&self) -> bool {
        let rows = self.row_model();
        !rows.is_empty() && rows.iter().all(Row::is_selected)
    }

    pub fn is_some_page_rows_selected(&self) -> bool {
        !self.is_all_page_rows_selected() && self.row_model().iter().any(Row::is_selected)
    }

    /// Select or clear every row in the data set.
    pub fn toggle_all_rows_selected(&self, value: Option<bool>) {
        let value = value.unwrap_or(!self.is_all_rows_selected());
        let rows = self.core_row_model();
        self.apply_bulk_selection(&rows, value);
    }

    /// Select or clear every row on the current page.
    pub fn toggle_all_page_rows_selected(&self, value: Option<bool>) {
        let value = value.unwrap_or(!self.is_all_page_rows_selected());
        let rows = self.row_model();
        self.apply_bulk_selection(&rows, value);
    }

    pub fn reset_row_selection(&self) {
        self.set_row_selection(RowSelectionState::new());
    }

    fn apply_bulk_selection(&self, rows: &[Row<'_, T>], value: bool) {
        if value && !self.config().enable_multi_row_selection {
            log::debug!("bulk select ignored: multi-row selection is disabled");
            return;
        }

        let mut next = self.with_row_selection(Clone::clone);
        for row in rows {
            if value {
                if row.can_select() {
                    next.insert(row.id.to_string(), true);
                }
            } else {
                next.remove(row.id);
            }
        }
        self.set_row_selection(next);
    }
}
