//! Page navigation bound to a table instance.

use tabledom::{Element, Tag};

use crate::table::Table;

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    First,
    Previous,
    Next,
    Last,
    GoTo(usize),
    SetPageSize(usize),
}

/// Apply a navigation action to the table's pagination state.
pub fn apply<T>(table: &Table<T>, action: PaginationAction) {
    match action {
        PaginationAction::First => table.first_page(),
        PaginationAction::Previous => table.previous_page(),
        PaginationAction::Next => table.next_page(),
        PaginationAction::Last => table.last_page(),
        PaginationAction::GoTo(page_index) => table.set_page_index(page_index),
        PaginationAction::SetPageSize(page_size) => table.set_page_size(page_size),
    }
}

/// Render the selection summary, page size selector, page indicator and
/// navigation buttons.
pub fn render<T>(table: &Table<T>) -> Element {
    let pagination = table.pagination();
    let page_count = table.page_count().max(1);

    let summary = Element::div()
        .class("flex-1 text-sm text-muted-foreground")
        .text_content(format!(
            "{} of {} row(s) selected.",
            table.selected_row_count(),
            table.row_count()
        ));

    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&pagination.page_size) {
        sizes.push(pagination.page_size);
        sizes.sort_unstable();
    }
    let page_size = Element::div()
        .class("flex items-center space-x-2")
        .child(
            Element::new(Tag::P)
                .class("text-sm font-medium")
                .text_content("Rows per page"),
        )
        .child(
            Element::new(Tag::Select)
                .class("h-8 w-[70px]")
                .attr("data-action", "page-size")
                .children(sizes.into_iter().map(|size| {
                    let option = Element::new(Tag::Option)
                        .attr("value", size.to_string())
                        .text_content(size.to_string());
                    if size == pagination.page_size {
                        option.attr("selected", "selected")
                    } else {
                        option
                    }
                })),
        );

    let indicator = Element::div()
        .class("flex w-[100px] items-center justify-center text-sm font-medium")
        .text_content(format!(
            "Page {} of {}",
            pagination.page_index + 1,
            page_count
        ));

    let can_previous = table.can_previous_page();
    let can_next = table.can_next_page();
    let nav = Element::div().class("flex items-center space-x-2").children([
        nav_button("first-page", "Go to first page", "«", !can_previous),
        nav_button("previous-page", "Go to previous page", "‹", !can_previous),
        nav_button("next-page", "Go to next page", "›", !can_next),
        nav_button("last-page", "Go to last page", "»", !can_next),
    ]);

    Element::div()
        .key("pagination")
        .class("flex items-center justify-between px-2")
        .child(summary)
        .child(
            Element::div()
                .class("flex items-center space-x-6 lg:space-x-8")
                .children([page_size, indicator, nav]),
        )
}

fn nav_button(action: &str, label: &str, glyph: &str, disabled: bool) -> Element {
    Element::button(glyph)
        .key(action)
        .class("h-8 w-8 p-0")
        .attr("aria-label", label)
        .attr("data-action", action)
        .disabled(disabled)
}
