//! Headless table engine.
//!
//! A [`Table`] computes header groups, row models, pagination, selection,
//! pinning and sizing from shared data, column definitions and state. It owns
//! no UI: the grid component renders from what it exposes.
//!
//! State lives in a [`State<TableState>`] cell supplied by the host so it
//! survives between table instances. Row selection and column pinning may
//! instead be *controlled*: the host passes the current value plus a change
//! callback, and every update is routed to that callback.

mod column;
mod header;
mod options;
mod pagination;
mod pinning;
mod row;
mod selection;
mod sizing;
mod state;

use std::sync::Arc;

pub use column::{
    Accessor, CellContext, CellRenderer, Column, ColumnDef, HeaderContext, HeaderRenderer, Section,
};
pub use header::{Header, HeaderGroup};
pub use options::{ColumnDefaults, ColumnResizeDirection, ColumnResizeMode, TableConfig};
pub use row::{Cell, Row};
pub use sizing::{ResizeHandler, ResizeInput};
pub use state::{
    ColumnPinningState, ColumnSizingInfo, ColumnSizingState, PaginationState, PinSide,
    RowSelectionState, TableState,
};

use crate::state::State;

/// Derives a row id from the row and its index in the data set.
pub type RowIdFn<T> = Arc<dyn Fn(&T, usize) -> String>;

pub type OnChange<S> = Box<dyn Fn(S)>;

/// A state slice owned by the host: the current value and a setter.
pub struct Controlled<S> {
    pub value: S,
    pub on_change: OnChange<S>,
}

impl<S> Controlled<S> {
    pub fn new(value: S, on_change: impl Fn(S) + 'static) -> Self {
        Self {
            value,
            on_change: Box::new(on_change),
        }
    }
}

/// Everything needed to build a [`Table`].
pub struct TableOptions<T> {
    pub data: Arc<Vec<T>>,
    pub columns: Arc<Vec<ColumnDef<T>>>,
    pub config: TableConfig,
    pub state: State<TableState>,
    pub row_selection: Option<Controlled<RowSelectionState>>,
    pub column_pinning: Option<Controlled<ColumnPinningState>>,
    pub get_row_id: Option<RowIdFn<T>>,
}

impl<T> TableOptions<T> {
    pub fn new(data: impl Into<Arc<Vec<T>>>, columns: impl Into<Arc<Vec<ColumnDef<T>>>>) -> Self {
        Self {
            data: data.into(),
            columns: columns.into(),
            config: TableConfig::default(),
            state: State::default(),
            row_selection: None,
            column_pinning: None,
            get_row_id: None,
        }
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep engine state in `state`, shared with whoever else holds it.
    pub fn state(mut self, state: State<TableState>) -> Self {
        self.state = state;
        self
    }

    pub fn row_selection(
        mut self,
        value: RowSelectionState,
        on_change: impl Fn(RowSelectionState) + 'static,
    ) -> Self {
        self.row_selection = Some(Controlled::new(value, on_change));
        self
    }

    pub fn column_pinning(
        mut self,
        value: ColumnPinningState,
        on_change: impl Fn(ColumnPinningState) + 'static,
    ) -> Self {
        self.column_pinning = Some(Controlled::new(value, on_change));
        self
    }

    pub fn row_id(mut self, get_row_id: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.get_row_id = Some(Arc::new(get_row_id));
        self
    }
}

/// Flattened column tree entry.
#[derive(Debug)]
pub(crate) struct ColumnNode {
    pub id: String,
    /// Child indices from the top-level column list down to this column.
    pub path: Vec<usize>,
    pub depth: usize,
    pub parent: Option<usize>,
    /// Leaf node indices under this column, in definition order.
    pub leaves: Vec<usize>,
    pub is_leaf: bool,
}

pub struct Table<T> {
    options: TableOptions<T>,
    nodes: Vec<ColumnNode>,
    leaf_nodes: Vec<usize>,
    max_depth: usize,
    row_ids: Vec<String>,
}

impl<T> Table<T> {
    pub fn new(options: TableOptions<T>) -> Self {
        let mut nodes = Vec::new();
        let leaf_nodes = flatten(&options.columns, &[], None, &mut nodes);
        let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

        for (i, node) in nodes.iter().enumerate() {
            if nodes[..i].iter().any(|other| other.id == node.id) {
                log::warn!("duplicate column id '{}'; lookups resolve to the first", node.id);
            }
        }

        let row_ids = options
            .data
            .iter()
            .enumerate()
            .map(|(index, row)| match &options.get_row_id {
                Some(get_row_id) => get_row_id(row, index),
                None => index.to_string(),
            })
            .collect();

        log::trace!(
            "table built: {} rows, {} columns ({} leaves), depth {}",
            options.data.len(),
            nodes.len(),
            leaf_nodes.len(),
            max_depth
        );

        Self {
            options,
            nodes,
            leaf_nodes,
            max_depth,
            row_ids,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.options.config
    }

    pub fn data(&self) -> &[T] {
        &self.options.data
    }

    pub fn column_defs(&self) -> &[ColumnDef<T>] {
        &self.options.columns
    }

    // =========================================================================
    // State
    // =========================================================================

    /// A snapshot of the full state, with controlled slices applied.
    pub fn state(&self) -> TableState {
        let mut state = self.options.state.get();
        if let Some(controlled) = &self.options.row_selection {
            state.row_selection = controlled.value.clone();
        }
        if let Some(controlled) = &self.options.column_pinning {
            state.column_pinning = controlled.value.clone();
        }
        state
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&TableState) -> R) -> R {
        self.options.state.with(f)
    }

    pub(crate) fn with_row_selection<R>(&self, f: impl FnOnce(&RowSelectionState) -> R) -> R {
        match &self.options.row_selection {
            Some(controlled) => f(&controlled.value),
            None => self.options.state.with(|s| f(&s.row_selection)),
        }
    }

    pub(crate) fn with_column_pinning<R>(&self, f: impl FnOnce(&ColumnPinningState) -> R) -> R {
        match &self.options.column_pinning {
            Some(controlled) => f(&controlled.value),
            None => self.options.state.with(|s| f(&s.column_pinning)),
        }
    }

    pub fn set_row_selection(&self, next: RowSelectionState) {
        log::debug!("row selection -> {:?}", next.keys().collect::<Vec<_>>());
        match &self.options.row_selection {
            Some(controlled) => (controlled.on_change)(next),
            None => self.options.state.update(|s| s.row_selection = next),
        }
    }

    pub fn set_column_pinning(&self, next: ColumnPinningState) {
        log::debug!("column pinning -> left {:?}, right {:?}", next.left, next.right);
        match &self.options.column_pinning {
            Some(controlled) => (controlled.on_change)(next),
            None => self.options.state.update(|s| s.column_pinning = next),
        }
    }

    pub fn set_column_sizing(&self, next: ColumnSizingState) {
        self.options.state.update(|s| s.column_sizing = next);
    }

    pub fn set_column_sizing_info(&self, next: ColumnSizingInfo) {
        self.options.state.update(|s| s.column_sizing_info = next);
    }

    pub fn set_pagination(&self, next: PaginationState) {
        log::debug!(
            "pagination -> page {} (size {})",
            next.page_index,
            next.page_size
        );
        self.options.state.update(|s| s.pagination = next);
    }

    // =========================================================================
    // Columns
    // =========================================================================

    pub fn column(&self, id: &str) -> Option<Column<'_, T>> {
        self.nodes
            .iter()
            .position(|node| node.id == id)
            .map(|node| self.column_at(node))
    }

    /// Top-level columns, in definition order.
    pub fn all_columns(&self) -> Vec<Column<'_, T>> {
        (0..self.nodes.len())
            .filter(|&node| self.nodes[node].depth == 0)
            .map(|node| self.column_at(node))
            .collect()
    }

    /// Every column, groups before their children.
    pub fn all_flat_columns(&self) -> Vec<Column<'_, T>> {
        (0..self.nodes.len()).map(|node| self.column_at(node)).collect()
    }

    /// Leaf columns in definition order, ignoring pinning.
    pub fn all_leaf_columns(&self) -> Vec<Column<'_, T>> {
        self.columns_at(self.leaf_nodes.clone())
    }

    /// Leaf columns in display order: left, center, right.
    pub fn visible_leaf_columns(&self) -> Vec<Column<'_, T>> {
        self.columns_at(self.visible_leaf_nodes())
    }

    pub fn left_leaf_columns(&self) -> Vec<Column<'_, T>> {
        self.columns_at(self.section_leaves(Section::Left))
    }

    pub fn center_leaf_columns(&self) -> Vec<Column<'_, T>> {
        self.columns_at(self.section_leaves(Section::Center))
    }

    pub fn right_leaf_columns(&self) -> Vec<Column<'_, T>> {
        self.columns_at(self.section_leaves(Section::Right))
    }

    pub(crate) fn column_at(&self, node: usize) -> Column<'_, T> {
        Column { table: self, node }
    }

    fn columns_at(&self, nodes: Vec<usize>) -> Vec<Column<'_, T>> {
        nodes.into_iter().map(|node| self.column_at(node)).collect()
    }

    pub(crate) fn def(&self, node: usize) -> &ColumnDef<T> {
        let path = &self.nodes[node].path;
        let mut def = &self.options.columns[path[0]];
        for &child in &path[1..] {
            def = &def.columns[child];
        }
        def
    }

    fn leaf_node(&self, id: &str) -> Option<usize> {
        self.leaf_nodes
            .iter()
            .copied()
            .find(|&node| self.nodes[node].id == id)
    }

    /// Leaf nodes of one section in display order. Pinned ids naming no leaf
    /// column are skipped.
    pub(crate) fn section_leaves(&self, section: Section) -> Vec<usize> {
        self.with_column_pinning(|pinning| match section {
            Section::Left => pinning
                .left
                .iter()
                .filter_map(|id| self.leaf_node(id))
                .collect(),
            Section::Right => pinning
                .right
                .iter()
                .filter_map(|id| self.leaf_node(id))
                .collect(),
            Section::Center => self
                .leaf_nodes
                .iter()
                .copied()
                .filter(|&node| {
                    let id = &self.nodes[node].id;
                    !pinning.left.contains(id) && !pinning.right.contains(id)
                })
                .collect(),
        })
    }

    pub(crate) fn visible_leaf_nodes(&self) -> Vec<usize> {
        let mut nodes = self.section_leaves(Section::Left);
        nodes.extend(self.section_leaves(Section::Center));
        nodes.extend(self.section_leaves(Section::Right));
        nodes
    }
}

fn flatten<T>(
    defs: &[ColumnDef<T>],
    prefix: &[usize],
    parent: Option<usize>,
    nodes: &mut Vec<ColumnNode>,
) -> Vec<usize> {
    let mut leaves = Vec::new();
    for (i, def) in defs.iter().enumerate() {
        let mut path = prefix.to_vec();
        path.push(i);

        let index = nodes.len();
        let is_leaf = def.columns.is_empty();
        nodes.push(ColumnNode {
            id: def.id.clone(),
            path: path.clone(),
            depth: prefix.len(),
            parent,
            leaves: Vec::new(),
            is_leaf,
        });

        let own = if is_leaf {
            vec![index]
        } else {
            flatten(&def.columns, &path, Some(index), nodes)
        };
        nodes[index].leaves.clone_from(&own);
        leaves.extend(own);
    }
    leaves
}
