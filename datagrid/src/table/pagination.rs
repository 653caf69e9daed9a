//! Client-side pagination.

use super::row::Row;
use super::state::PaginationState;
use super::Table;

impl<T> Table<T> {
    pub fn pagination(&self) -> PaginationState {
        self.with_state(|s| s.pagination)
    }

    /// Rows on the current page.
    pub fn row_model(&self) -> Vec<Row<'_, T>> {
        let PaginationState {
            page_index,
            page_size,
        } = self.pagination();
        let page_size = page_size.max(1);
        self.core_row_model()
            .into_iter()
            .skip(page_index.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_ids.len()
    }

    pub fn page_count(&self) -> usize {
        self.row_count().div_ceil(self.pagination().page_size.max(1))
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination().page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        let page_count = self.page_count();
        page_count > 0 && self.pagination().page_index < page_count - 1
    }

    /// Jump to `page_index`, clamped to the existing pages.
    pub fn set_page_index(&self, page_index: usize) {
        let max_index = self.page_count().saturating_sub(1);
        let mut pagination = self.pagination();
        pagination.page_index = page_index.min(max_index);
        self.set_pagination(pagination);
    }

    pub fn previous_page(&self) {
        self.set_page_index(self.pagination().page_index.saturating_sub(1));
    }

    pub fn next_page(&self) {
        self.set_page_index(self.pagination().page_index + 1);
    }

    pub fn first_page(&self) {
        self.set_page_index(0);
    }

    pub fn last_page(&self) {
        self.set_page_index(self.page_count().saturating_sub(1));
    }

    pub fn reset_page_index(&self) {
        self.set_page_index(0);
    }

    /// Change the page size, keeping the first row of the current page
    /// visible.
    pub fn set_page_size(&self, page_size: usize) {
        let page_size = page_size.max(1);
        let current = self.pagination();
        let top_row_index = current.page_size.max(1) * current.page_index;
        self.set_pagination(PaginationState {
            page_index: top_row_index / page_size,
            page_size,
        });
    }
}
