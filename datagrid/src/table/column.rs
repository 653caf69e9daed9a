//! Column definitions and column handles.

use std::fmt;

use tabledom::Element;

use super::header::Header;
use super::row::Row;
use super::state::PinSide;
use super::Table;

pub type Accessor<T> = Box<dyn Fn(&T) -> String>;
pub type HeaderRenderer<T> = Box<dyn Fn(&HeaderContext<'_, T>) -> Element>;
pub type CellRenderer<T> = Box<dyn Fn(&CellContext<'_, T>) -> Element>;

/// Horizontal section of the table a column is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Left,
    Center,
    Right,
}

impl From<PinSide> for Section {
    fn from(side: PinSide) -> Self {
        match side {
            PinSide::Left => Section::Left,
            PinSide::Right => Section::Right,
        }
    }
}

impl From<Option<PinSide>> for Section {
    fn from(side: Option<PinSide>) -> Self {
        side.map_or(Section::Center, Section::from)
    }
}

/// A column definition.
///
/// Leaf columns render cells; columns with children are groups that only
/// contribute a spanning header.
///
/// # Examples
///
/// ```
/// use datagrid::table::ColumnDef;
///
/// struct User { id: u32, email: String }
///
/// let columns: Vec<ColumnDef<User>> = vec![
///     ColumnDef::selection("checkbox"),
///     ColumnDef::accessor("id", |u: &User| u.id.to_string()).size(60.0),
///     ColumnDef::accessor("email", |u: &User| u.email.clone()).header_text("Email"),
/// ];
/// assert_eq!(columns[2].id, "email");
/// ```
pub struct ColumnDef<T> {
    pub id: String,
    pub header: Option<HeaderRenderer<T>>,
    pub cell: Option<CellRenderer<T>>,
    pub accessor: Option<Accessor<T>>,
    pub size: Option<f64>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub enable_resizing: bool,
    pub enable_pinning: bool,
    /// Child columns. Non-empty for group columns.
    pub columns: Vec<ColumnDef<T>>,
}

impl<T: 'static> ColumnDef<T> {
    /// A column with no accessor; supply a cell renderer with [`cell`](Self::cell).
    pub fn display(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: None,
            cell: None,
            accessor: None,
            size: None,
            min_size: None,
            max_size: None,
            enable_resizing: true,
            enable_pinning: true,
            columns: Vec::new(),
        }
    }

    /// A column whose cell value is read from the row with `accessor`.
    pub fn accessor(id: impl Into<String>, accessor: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            accessor: Some(Box::new(accessor)),
            ..Self::display(id)
        }
    }

    /// A header-only column spanning `columns`.
    pub fn group(id: impl Into<String>, columns: Vec<ColumnDef<T>>) -> Self {
        Self {
            columns,
            ..Self::display(id)
        }
    }

    /// A fixed-width checkbox column bound to row selection.
    ///
    /// Cells carry `data-action="select-row"` and the row id; the header
    /// carries `data-action="select-all"` when multi-row selection is on.
    pub fn selection(id: impl Into<String>) -> Self {
        Self::display(id)
            .size(40.0)
            .resizable(false)
            .header(|cx| {
                let table = cx.table;
                if !table.config().enable_multi_row_selection {
                    return Element::span();
                }
                Element::checkbox(table.is_all_page_rows_selected())
                    .attr("aria-label", "Select all")
                    .attr("data-action", "select-all")
                    .attr(
                        "data-state",
                        if table.is_some_page_rows_selected() {
                            "indeterminate"
                        } else {
                            "idle"
                        },
                    )
            })
            .cell(|cx| {
                Element::checkbox(cx.row.is_selected())
                    .attr("aria-label", "Select row")
                    .attr("data-action", "select-row")
                    .attr("data-row-id", cx.row.id)
                    .disabled(!cx.row.can_select())
            })
    }

    pub fn header(mut self, render: impl Fn(&HeaderContext<'_, T>) -> Element + 'static) -> Self {
        self.header = Some(Box::new(render));
        self
    }

    pub fn header_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.header(move |_| Element::text(text.as_str()))
    }

    pub fn cell(mut self, render: impl Fn(&CellContext<'_, T>) -> Element + 'static) -> Self {
        self.cell = Some(Box::new(render));
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(mut self, max_size: f64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn resizable(mut self, enabled: bool) -> Self {
        self.enable_resizing = enabled;
        self
    }

    pub fn pinnable(mut self, enabled: bool) -> Self {
        self.enable_pinning = enabled;
        self
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("enable_resizing", &self.enable_resizing)
            .field("enable_pinning", &self.enable_pinning)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

/// A column as seen through a [`Table`]: its definition plus everything the
/// engine derives for it (pinning, sizing, position).
pub struct Column<'t, T> {
    pub(super) table: &'t Table<T>,
    pub(super) node: usize,
}

impl<T> Clone for Column<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<'_, T> {}

impl<T> PartialEq for Column<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table) && self.node == other.node
    }
}

impl<T> fmt::Debug for Column<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id())
            .field("depth", &self.depth())
            .finish()
    }
}

impl<'t, T> Column<'t, T> {
    pub fn id(&self) -> &'t str {
        &self.table.nodes[self.node].id
    }

    pub fn def(&self) -> &'t ColumnDef<T> {
        self.table.def(self.node)
    }

    pub fn depth(&self) -> usize {
        self.table.nodes[self.node].depth
    }

    pub fn is_leaf(&self) -> bool {
        self.table.nodes[self.node].is_leaf
    }

    pub fn parent(&self) -> Option<Column<'t, T>> {
        self.table.nodes[self.node]
            .parent
            .map(|node| self.table.column_at(node))
    }

    /// The leaf columns under this column; a leaf returns itself.
    pub fn leaf_columns(&self) -> Vec<Column<'t, T>> {
        self.table.nodes[self.node]
            .leaves
            .iter()
            .map(|&node| self.table.column_at(node))
            .collect()
    }

    pub(super) fn leaf_nodes(&self) -> &'t [usize] {
        &self.table.nodes[self.node].leaves
    }
}

/// Arguments passed to a header renderer.
pub struct HeaderContext<'a, T> {
    pub table: &'a Table<T>,
    pub header: &'a Header<'a, T>,
    pub column: Column<'a, T>,
}

/// Arguments passed to a cell renderer.
pub struct CellContext<'a, T> {
    pub table: &'a Table<T>,
    pub row: &'a Row<'a, T>,
    pub column: Column<'a, T>,
}

impl<T> CellContext<'_, T> {
    /// The accessor value for this cell, if the column has an accessor.
    pub fn value(&self) -> Option<String> {
        self.column
            .def()
            .accessor
            .as_ref()
            .map(|accessor| accessor(self.row.original))
    }
}
