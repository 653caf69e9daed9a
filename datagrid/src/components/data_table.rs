//! DataTable component.
//!
//! Owns the grid's UI state (row selection, column pinning) plus the engine's
//! internal state, builds a fresh [`Table`] from them for every render or
//! event, and renders header, body and pagination from it.

use std::sync::Arc;

use tabledom::{Element, Style};

use crate::components::events::GridEvent;
use crate::components::pagination;
use crate::config::DataTableConfig;
use crate::error::GridError;
use crate::state::State;
use crate::styles::column_style;
use crate::table::{
    ColumnDef, ColumnDefaults, ColumnPinningState, PaginationState, RowIdFn, RowSelectionState,
    Table, TableConfig, TableOptions, TableState,
};

const RESIZE_HANDLE_CLASS: &str = "w-[3px] absolute top-0 right-0 bg-black cursor-col-resize \
     touch-none select-none h-full hidden group-hover:flex hover:flex rounded-md";

/// A paginated, column-pinned, resizable, single-row-selectable grid.
///
/// # Example
///
/// ```
/// use datagrid::prelude::*;
///
/// struct Invoice { id: u32, amount: u32 }
///
/// let grid = DataTable::new(
///     vec![
///         ColumnDef::selection("checkbox"),
///         ColumnDef::accessor("id", |i: &Invoice| i.id.to_string()),
///         ColumnDef::accessor("amount", |i: &Invoice| i.amount.to_string()),
///     ],
///     vec![Invoice { id: 1, amount: 250 }, Invoice { id: 2, amount: 150 }],
/// );
///
/// grid.handle(GridEvent::ToggleRow { row_id: "1".into() }).unwrap();
/// assert_eq!(grid.row_selection().get("1"), Some(&true));
///
/// let html = datagrid::to_html(&grid.render());
/// assert!(html.contains("data-state=\"selected\""));
/// ```
pub struct DataTable<T> {
    columns: Arc<Vec<ColumnDef<T>>>,
    data: Arc<Vec<T>>,
    config: DataTableConfig,
    row_selection: State<RowSelectionState>,
    column_pinning: State<ColumnPinningState>,
    table_state: State<TableState>,
    get_row_id: Option<RowIdFn<T>>,
}

impl<T: 'static> DataTable<T> {
    /// A grid with the default configuration.
    pub fn new(columns: Vec<ColumnDef<T>>, data: Vec<T>) -> Self {
        Self::build(columns, data, DataTableConfig::default())
    }

    pub fn with_config(
        columns: Vec<ColumnDef<T>>,
        data: Vec<T>,
        config: DataTableConfig,
    ) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::build(columns, data, config))
    }

    fn build(columns: Vec<ColumnDef<T>>, data: Vec<T>, config: DataTableConfig) -> Self {
        let table_state = State::new(TableState {
            pagination: PaginationState {
                page_index: 0,
                page_size: config.page_size,
            },
            ..Default::default()
        });
        Self {
            columns: Arc::new(columns),
            data: Arc::new(data),
            row_selection: State::new(RowSelectionState::new()),
            column_pinning: State::new(config.pinning.clone()),
            table_state,
            config,
            get_row_id: None,
        }
    }

    /// Derive row ids from the rows instead of their positions.
    pub fn row_id(mut self, get_row_id: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.get_row_id = Some(Arc::new(get_row_id));
        self
    }

    /// Replace the rows. The page index returns to the first page; selection
    /// is kept, keyed by row id.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = Arc::new(data);
        self.table_state.update(|s| s.pagination.page_index = 0);
    }

    pub fn config(&self) -> &DataTableConfig {
        &self.config
    }

    pub fn row_selection(&self) -> RowSelectionState {
        self.row_selection.get()
    }

    pub fn column_pinning(&self) -> ColumnPinningState {
        self.column_pinning.get()
    }

    /// Engine state: sizing, the resize gesture and pagination.
    pub fn table_state(&self) -> TableState {
        self.table_state.get()
    }

    /// Whether any state changed since the last [`render`](Self::render).
    pub fn needs_render(&self) -> bool {
        self.row_selection.is_dirty() || self.column_pinning.is_dirty() || self.table_state.is_dirty()
    }

    /// Build an engine instance over the current state. Selection and pinning
    /// updates made through it are written back to this grid.
    pub fn table(&self) -> Table<T> {
        let selection = self.row_selection.clone();
        let pinning = self.column_pinning.clone();

        let config = TableConfig::default()
            .multi_row_selection(false)
            .resize_mode(self.config.resize_mode)
            .default_column(ColumnDefaults::default().min_size(self.config.min_size));

        let mut options = TableOptions::new(Arc::clone(&self.data), Arc::clone(&self.columns))
            .config(config)
            .state(self.table_state.clone())
            .row_selection(self.row_selection.get(), move |next| selection.set(next))
            .column_pinning(self.column_pinning.get(), move |next| pinning.set(next));
        options.get_row_id = self.get_row_id.clone();

        Table::new(options)
    }

    pub fn render(&self) -> Element {
        let table = self.table();
        log::trace!(
            "render grid: {} of {} rows, {} leaf columns",
            table.row_model().len(),
            table.row_count(),
            table.visible_leaf_columns().len()
        );

        let grid = Element::table()
            .class("min-w-full table-fixed")
            .style(Style::new().width(table.total_size()))
            .child(render_header(&table))
            .child(render_body(&table, &self.config.empty_text));

        let element = Element::div()
            .class("space-y-4")
            .child(Element::div().class("rounded-md border").child(grid))
            .child(pagination::render(&table));

        self.row_selection.clear_dirty();
        self.column_pinning.clear_dirty();
        self.table_state.clear_dirty();
        element
    }

    /// Apply a UI event. The result is visible to the next render.
    pub fn handle(&self, event: GridEvent) -> Result<(), GridError> {
        log::debug!("grid event: {event:?}");
        let table = self.table();

        match event {
            GridEvent::ResizeStart { header_id, input } => {
                let header = table
                    .header(&header_id)
                    .ok_or(GridError::UnknownHeader(header_id))?;
                header.resize_handler().start(input);
            }
            GridEvent::ResizeMove { client_x } => table.resize_move(client_x),
            GridEvent::ResizeEnd { client_x } => table.resize_end(client_x),
            GridEvent::ResetSize { header_id } => {
                let header = table
                    .header(&header_id)
                    .ok_or(GridError::UnknownHeader(header_id))?;
                header.column().reset_size();
            }
            GridEvent::ToggleRow { row_id } => {
                let row = table.row(&row_id).ok_or(GridError::UnknownRow(row_id))?;
                row.toggle_selected(None);
            }
            GridEvent::ToggleAllPageRows => table.toggle_all_page_rows_selected(None),
            GridEvent::Pin { column_id, side } => {
                let column = table
                    .column(&column_id)
                    .ok_or(GridError::UnknownColumn(column_id))?;
                column.pin(side);
            }
            GridEvent::Paginate(action) => pagination::apply(&table, action),
        }
        Ok(())
    }
}

fn render_header<T>(table: &Table<T>) -> Element {
    Element::thead().children(table.header_groups().into_iter().map(|group| {
        Element::tr().key(group.id.as_str()).children(group.headers.iter().map(|header| {
            let column = header.column();
            let mut th = Element::th()
                .key(header.id.as_str())
                .col_span(header.col_span)
                .class("relative group overflow-hidden")
                .style(column_style(&column));

            if let Some(content) = header.render() {
                th = th.child(content);
            }
            if column.can_resize() {
                th = th.child(
                    Element::div()
                        .class(RESIZE_HANDLE_CLASS)
                        .class_if(column.is_resizing(), "bg-blue-500")
                        .attr("data-action", "resize")
                        .attr("data-header-id", header.id.as_str()),
                );
            }
            th
        }))
    }))
}

fn render_body<T>(table: &Table<T>, empty_text: &str) -> Element {
    let rows = table.row_model();
    if rows.is_empty() {
        let span = table.visible_leaf_columns().len().max(1);
        return Element::tbody().child(
            Element::tr().child(
                Element::td()
                    .col_span(u16::try_from(span).unwrap_or(u16::MAX))
                    .class("h-24 text-center")
                    .text_content(empty_text),
            ),
        );
    }

    Element::tbody().children(rows.iter().map(|row| {
        let selected = row.is_selected();
        let tr = Element::tr()
            .key(row.id)
            .class("group")
            .attr("data-row-id", row.id);
        let tr = if selected {
            tr.attr("data-state", "selected")
        } else {
            tr
        };

        tr.children(row.visible_cells().into_iter().map(|cell| {
            let pinned = cell.column.is_pinned().is_some();
            Element::td()
                .key(cell.id())
                .class("overflow-hidden group-hover:bg-muted")
                .class_if(pinned && !selected, "bg-white")
                .class_if(pinned && selected, "bg-muted")
                .style(column_style(&cell.column))
                .child(cell.render())
        }))
    }))
}
