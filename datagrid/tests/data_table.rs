use datagrid::prelude::*;
use datagrid::tabledom::{find_all, find_element, Position, Tag};
use datagrid::to_html;

#[derive(Debug, Clone)]
struct Payment {
    id: u32,
    status: String,
    email: String,
    amount: u32,
}

fn payments(n: u32) -> Vec<Payment> {
    (0..n)
        .map(|i| Payment {
            id: i,
            status: if i % 2 == 0 { "pending" } else { "success" }.to_string(),
            email: format!("user{i}@example.com"),
            amount: 100 + i,
        })
        .collect()
}

fn columns() -> Vec<ColumnDef<Payment>> {
    vec![
        ColumnDef::selection("checkbox"),
        ColumnDef::accessor("id", |p: &Payment| p.id.to_string()),
        ColumnDef::accessor("status", |p: &Payment| p.status.clone()).header_text("Status"),
        ColumnDef::accessor("email", |p: &Payment| p.email.clone()),
        ColumnDef::accessor("amount", |p: &Payment| p.amount.to_string()),
    ]
}

fn grid(n: u32) -> DataTable<Payment> {
    DataTable::new(columns(), payments(n))
}

fn style_of(root: &Element, key: &str) -> Style {
    find_element(root, key)
        .unwrap_or_else(|| panic!("no element keyed {key}"))
        .style
        .clone()
}

fn resize_handle<'a>(root: &'a Element, header_id: &str) -> Option<&'a Element> {
    find_element(root, header_id)?
        .child_elements()
        .iter()
        .find(|e| e.get_attr("data-action") == Some("resize"))
}

// ============================================================================
// Body
// ============================================================================

#[test]
fn test_empty_data_renders_single_spanning_cell() {
    let grid = grid(0);
    let root = grid.render();

    let tbody = find_all(&root, Tag::Tbody)[0];
    let cells = find_all(tbody, Tag::Td);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].col_span, Some(5));
    assert_eq!(cells[0].text_value(), "No results.");

    let html = to_html(&root);
    assert!(html.contains(r#"<td class="h-24 text-center" colspan="5">No results.</td>"#));
    assert!(html.contains("Page 1 of 1"));
}

#[test]
fn test_custom_empty_text() {
    let config = DataTableConfig::default().empty_text("Nothing yet");
    let grid = DataTable::with_config(columns(), Vec::new(), config).unwrap();

    let root = grid.render();
    let tbody = find_all(&root, Tag::Tbody)[0];
    assert_eq!(tbody.text_value(), "Nothing yet");
}

#[test]
fn test_rows_and_cells_are_keyed_by_id() {
    let grid = grid(3);
    let root = grid.render();

    let row = find_element(&root, "2").unwrap();
    assert_eq!(row.tag, Tag::Tr);
    assert_eq!(row.get_attr("data-row-id"), Some("2"));
    assert_eq!(row.child_elements().len(), 5);
    assert_eq!(find_element(&root, "2_email").unwrap().text_value(), "user2@example.com");
}

#[test]
fn test_custom_row_ids() {
    let grid = DataTable::new(columns(), payments(3)).row_id(|p, _| format!("pay-{}", p.id));
    grid.handle(GridEvent::ToggleRow {
        row_id: "pay-1".into(),
    })
    .unwrap();

    let root = grid.render();
    assert!(find_element(&root, "pay-1_amount").is_some());
    assert_eq!(grid.row_selection().get("pay-1"), Some(&true));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selecting_a_row_deselects_the_previous_one() {
    let grid = grid(3);

    grid.handle(GridEvent::ToggleRow { row_id: "0".into() }).unwrap();
    grid.handle(GridEvent::ToggleRow { row_id: "1".into() }).unwrap();

    let selection = grid.row_selection();
    assert_eq!(selection.values().filter(|v| **v).count(), 1);
    assert_eq!(selection.get("1"), Some(&true));

    let root = grid.render();
    assert_eq!(find_element(&root, "1").unwrap().get_attr("data-state"), Some("selected"));
    assert_eq!(find_element(&root, "0").unwrap().get_attr("data-state"), None);
    assert!(to_html(&root).contains("1 of 3 row(s) selected."));
}

#[test]
fn test_toggling_selected_row_clears_selection() {
    let grid = grid(3);
    grid.handle(GridEvent::ToggleRow { row_id: "2".into() }).unwrap();
    grid.handle(GridEvent::ToggleRow { row_id: "2".into() }).unwrap();
    assert!(grid.row_selection().is_empty());
}

#[test]
fn test_select_all_is_unavailable() {
    let grid = grid(3);
    grid.handle(GridEvent::ToggleAllPageRows).unwrap();
    assert!(grid.row_selection().is_empty());

    let root = grid.render();
    let inputs = find_all(&root, Tag::Input);
    assert!(inputs.iter().all(|i| i.get_attr("data-action") != Some("select-all")));
    assert_eq!(inputs.len(), 3);
}

#[test]
fn test_selection_checkbox_reflects_state() {
    let grid = grid(2);
    grid.handle(GridEvent::ToggleRow { row_id: "1".into() }).unwrap();

    let root = grid.render();
    let checkbox = &find_element(&root, "1_checkbox").unwrap().child_elements()[0];
    assert_eq!(checkbox.checked, Some(true));
    assert_eq!(checkbox.get_attr("data-row-id"), Some("1"));

    let other = &find_element(&root, "0_checkbox").unwrap().child_elements()[0];
    assert_eq!(other.checked, Some(false));
}

#[test]
fn test_pinned_cell_background_follows_selection() {
    let grid = grid(2);
    grid.handle(GridEvent::ToggleRow { row_id: "1".into() }).unwrap();
    let root = grid.render();

    let selected = find_element(&root, "1_id").unwrap();
    assert!(selected.has_class("bg-muted"));
    assert!(!selected.has_class("bg-white"));

    let unselected = find_element(&root, "0_id").unwrap();
    assert!(unselected.has_class("bg-white"));

    let unpinned = find_element(&root, "0_status").unwrap();
    assert!(!unpinned.has_class("bg-white"));
    assert!(!unpinned.has_class("bg-muted"));
}

#[test]
fn test_unknown_row() {
    let grid = grid(1);
    let err = grid
        .handle(GridEvent::ToggleRow {
            row_id: "missing".into(),
        })
        .unwrap_err();
    assert!(matches!(err, GridError::UnknownRow(id) if id == "missing"));
}

// ============================================================================
// Pinning and column styles
// ============================================================================

#[test]
fn test_default_pinning_styles() {
    let root = grid(1).render();

    let checkbox = style_of(&root, "left_0_checkbox");
    assert_eq!(checkbox.position, Some(Position::Sticky));
    assert_eq!(checkbox.left, Some(0.0));
    assert_eq!(checkbox.width, Some(40.0));
    assert_eq!(checkbox.box_shadow, None);
    assert_eq!(checkbox.opacity, Some(1.0));
    assert_eq!(checkbox.z_index, Some(1));

    let id = style_of(&root, "left_0_id");
    assert_eq!(id.left, Some(40.0));
    assert_eq!(
        id.box_shadow.as_ref().map(|s| s.to_string()).as_deref(),
        Some("-4px 0 4px -4px gray inset")
    );

    let status = style_of(&root, "0_status");
    assert_eq!(status.position, Some(Position::Relative));
    assert_eq!(status.left, None);
    assert_eq!(status.width, Some(150.0));
    assert_eq!(status.opacity, None);
    assert_eq!(status.z_index, Some(0));

    // Body cells share the header's style.
    assert_eq!(style_of(&root, "0_id"), id);
}

#[test]
fn test_pin_right_then_unpin() {
    let grid = grid(1);
    grid.handle(GridEvent::Pin {
        column_id: "amount".into(),
        side: Some(PinSide::Right),
    })
    .unwrap();

    let root = grid.render();
    let amount = style_of(&root, "right_0_amount");
    assert_eq!(amount.position, Some(Position::Sticky));
    assert_eq!(amount.right, Some(0.0));
    assert_eq!(
        amount.box_shadow.as_ref().map(|s| s.to_string()).as_deref(),
        Some("4px 0 4px -4px gray inset")
    );

    grid.handle(GridEvent::Pin {
        column_id: "id".into(),
        side: None,
    })
    .unwrap();
    let pinning = grid.column_pinning();
    assert_eq!(pinning.left, vec!["checkbox"]);
    assert_eq!(pinning.right, vec!["amount"]);

    let root = grid.render();
    assert!(style_of(&root, "left_0_checkbox").box_shadow.is_some());
    assert_eq!(style_of(&root, "0_id").position, Some(Position::Relative));
}

#[test]
fn test_pin_moves_column_to_other_side() {
    let grid = grid(1);
    grid.handle(GridEvent::Pin {
        column_id: "id".into(),
        side: Some(PinSide::Right),
    })
    .unwrap();

    let pinning = grid.column_pinning();
    assert_eq!(pinning.left, vec!["checkbox"]);
    assert_eq!(pinning.right, vec!["id"]);
}

#[test]
fn test_unknown_column() {
    let err = grid(1)
        .handle(GridEvent::Pin {
            column_id: "nope".into(),
            side: Some(PinSide::Left),
        })
        .unwrap_err();
    assert!(matches!(err, GridError::UnknownColumn(_)));
}

#[test]
fn test_config_pinning_replaces_defaults() {
    let config = DataTableConfig::default()
        .pinning(ColumnPinningState::new(["email"], ["checkbox"]));
    let grid = DataTable::with_config(columns(), payments(1), config).unwrap();
    let root = grid.render();

    assert!(find_element(&root, "left_0_email").is_some());
    assert!(find_element(&root, "right_0_checkbox").is_some());
    assert_eq!(style_of(&root, "0_id").position, Some(Position::Relative));
}

#[test]
fn test_config_pinning_twice_is_rejected() {
    let config = DataTableConfig::default()
        .pinning(ColumnPinningState::new(["id"], ["id"]));
    assert!(matches!(
        DataTable::with_config(columns(), payments(1), config),
        Err(GridError::PinnedTwice(_))
    ));
}

// ============================================================================
// Resizing
// ============================================================================

#[test]
fn test_min_size_applies_to_every_column() {
    let columns = vec![
        ColumnDef::accessor("id", |p: &Payment| p.id.to_string()).size(10.0),
        ColumnDef::accessor("email", |p: &Payment| p.email.clone()),
    ];
    let grid = DataTable::new(columns, payments(1));
    let root = grid.render();

    assert_eq!(style_of(&root, "left_0_id").width, Some(30.0));
    let table = find_all(&root, Tag::Table)[0];
    assert_eq!(table.style.width, Some(180.0));
}

#[test]
fn test_drag_resizes_while_moving() {
    let grid = grid(1);
    grid.handle(GridEvent::ResizeStart {
        header_id: "0_status".into(),
        input: ResizeInput::Pointer { client_x: 300.0 },
    })
    .unwrap();

    let root = grid.render();
    assert!(resize_handle(&root, "0_status").unwrap().has_class("bg-blue-500"));
    assert!(!resize_handle(&root, "0_email").unwrap().has_class("bg-blue-500"));

    grid.handle(GridEvent::ResizeMove { client_x: 375.0 }).unwrap();
    assert_eq!(style_of(&grid.render(), "0_status").width, Some(225.0));

    grid.handle(GridEvent::ResizeEnd { client_x: 375.0 }).unwrap();
    let root = grid.render();
    assert_eq!(style_of(&root, "0_status").width, Some(225.0));
    assert!(!resize_handle(&root, "0_status").unwrap().has_class("bg-blue-500"));
}

#[test]
fn test_on_end_mode_resizes_on_release() {
    let config = DataTableConfig::default().resize_mode(ColumnResizeMode::OnEnd);
    let grid = DataTable::with_config(columns(), payments(1), config).unwrap();

    grid.handle(GridEvent::ResizeStart {
        header_id: "0_email".into(),
        input: ResizeInput::Pointer { client_x: 0.0 },
    })
    .unwrap();
    grid.handle(GridEvent::ResizeMove { client_x: -30.0 }).unwrap();
    assert_eq!(style_of(&grid.render(), "0_email").width, Some(150.0));

    grid.handle(GridEvent::ResizeEnd { client_x: -30.0 }).unwrap();
    assert_eq!(style_of(&grid.render(), "0_email").width, Some(120.0));
}

#[test]
fn test_double_click_restores_default_width() {
    let grid = grid(1);
    grid.handle(GridEvent::ResizeStart {
        header_id: "0_email".into(),
        input: ResizeInput::Pointer { client_x: 0.0 },
    })
    .unwrap();
    grid.handle(GridEvent::ResizeEnd { client_x: 50.0 }).unwrap();
    assert_eq!(style_of(&grid.render(), "0_email").width, Some(200.0));

    grid.handle(GridEvent::ResetSize {
        header_id: "0_email".into(),
    })
    .unwrap();
    assert_eq!(style_of(&grid.render(), "0_email").width, Some(150.0));
    assert!(grid.table_state().column_sizing.is_empty());
}

#[test]
fn test_multi_touch_start_is_ignored() {
    let grid = grid(1);
    grid.handle(GridEvent::ResizeStart {
        header_id: "0_email".into(),
        input: ResizeInput::Touch {
            touches: vec![10.0, 40.0],
        },
    })
    .unwrap();
    grid.handle(GridEvent::ResizeEnd { client_x: 90.0 }).unwrap();

    assert_eq!(grid.table_state().column_sizing_info.is_resizing_column, None);
    assert_eq!(style_of(&grid.render(), "0_email").width, Some(150.0));
}

#[test]
fn test_selection_column_has_no_resize_handle() {
    let root = grid(1).render();
    assert!(resize_handle(&root, "left_0_checkbox").is_none());
    assert!(resize_handle(&root, "left_0_id").is_some());
}

#[test]
fn test_unknown_header() {
    let err = grid(1)
        .handle(GridEvent::ResetSize {
            header_id: "0_missing".into(),
        })
        .unwrap_err();
    assert!(matches!(err, GridError::UnknownHeader(_)));
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_pagination_navigation() {
    let grid = grid(25);
    let root = grid.render();
    let pagination = find_element(&root, "pagination").unwrap();
    assert!(pagination.text_value().contains("Page 1 of 3"));
    assert!(find_element(&root, "first-page").unwrap().disabled);
    assert!(find_element(&root, "previous-page").unwrap().disabled);
    assert!(!find_element(&root, "next-page").unwrap().disabled);

    grid.handle(GridEvent::Paginate(PaginationAction::Next)).unwrap();
    let root = grid.render();
    assert!(find_element(&root, "pagination").unwrap().text_value().contains("Page 2 of 3"));
    assert!(find_element(&root, "10").is_some());
    assert!(find_element(&root, "9").is_none());

    grid.handle(GridEvent::Paginate(PaginationAction::Last)).unwrap();
    let root = grid.render();
    assert!(find_element(&root, "last-page").unwrap().disabled);
    assert_eq!(find_all(find_all(&root, Tag::Tbody)[0], Tag::Tr).len(), 5);

    grid.handle(GridEvent::Paginate(PaginationAction::GoTo(0))).unwrap();
    assert_eq!(grid.table_state().pagination.page_index, 0);
}

#[test]
fn test_page_size_change() {
    let grid = grid(25);
    grid.handle(GridEvent::Paginate(PaginationAction::Next)).unwrap();
    grid.handle(GridEvent::Paginate(PaginationAction::SetPageSize(20)))
        .unwrap();

    let pagination = grid.table_state().pagination;
    assert_eq!(pagination.page_size, 20);
    assert_eq!(pagination.page_index, 0);

    let root = grid.render();
    let selected: Vec<_> = find_all(&root, Tag::Option)
        .into_iter()
        .filter(|o| o.get_attr("selected").is_some())
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].get_attr("value"), Some("20"));
}

#[test]
fn test_configured_page_size() {
    let config = DataTableConfig::default().page_size(5);
    let grid = DataTable::with_config(columns(), payments(12), config).unwrap();
    let root = grid.render();
    assert!(find_element(&root, "pagination").unwrap().text_value().contains("Page 1 of 3"));
    assert_eq!(find_all(find_all(&root, Tag::Tbody)[0], Tag::Tr).len(), 5);
}

#[test]
fn test_selection_survives_page_change() {
    let grid = grid(25);
    grid.handle(GridEvent::ToggleRow { row_id: "3".into() }).unwrap();
    grid.handle(GridEvent::Paginate(PaginationAction::Next)).unwrap();

    let root = grid.render();
    assert!(to_html(&root).contains("1 of 25 row(s) selected."));
    assert_eq!(grid.row_selection().get("3"), Some(&true));
}

#[test]
fn test_set_data_returns_to_first_page() {
    let mut grid = grid(25);
    grid.handle(GridEvent::Paginate(PaginationAction::Last)).unwrap();
    grid.set_data(payments(4));

    assert_eq!(grid.table_state().pagination.page_index, 0);
    assert!(find_element(&grid.render(), "3").is_some());
}

// ============================================================================
// Render bookkeeping
// ============================================================================

#[test]
fn test_needs_render_after_event() {
    let grid = grid(2);
    grid.render();
    assert!(!grid.needs_render());

    grid.handle(GridEvent::ToggleRow { row_id: "0".into() }).unwrap();
    assert!(grid.needs_render());

    grid.render();
    assert!(!grid.needs_render());
}

#[test]
fn test_header_text_renders() {
    let root = grid(1).render();
    assert_eq!(find_element(&root, "0_status").unwrap().text_value(), "Status");
}
