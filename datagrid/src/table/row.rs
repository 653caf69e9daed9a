//! Rows and cells.

use std::fmt;

use tabledom::Element;

use super::column::{CellContext, Column, Section};
use super::Table;

/// A data row as seen through a [`Table`].
pub struct Row<'t, T> {
    pub(super) table: &'t Table<T>,
    pub id: &'t str,
    /// Position in the full data set.
    pub index: usize,
    pub original: &'t T,
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<T> fmt::Debug for Row<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<'t, T> Row<'t, T> {
    /// Accessor value of the given column for this row.
    pub fn value(&self, column_id: &str) -> Option<String> {
        let column = self.table.column(column_id)?;
        column
            .def()
            .accessor
            .as_ref()
            .map(|accessor| accessor(self.original))
    }

    /// One cell per visible leaf column, in display order.
    pub fn visible_cells(&self) -> Vec<Cell<'t, T>> {
        self.cells_for(self.table.visible_leaf_nodes())
    }

    pub fn left_visible_cells(&self) -> Vec<Cell<'t, T>> {
        self.cells_for(self.table.section_leaves(Section::Left))
    }

    pub fn center_visible_cells(&self) -> Vec<Cell<'t, T>> {
        self.cells_for(self.table.section_leaves(Section::Center))
    }

    pub fn right_visible_cells(&self) -> Vec<Cell<'t, T>> {
        self.cells_for(self.table.section_leaves(Section::Right))
    }

    fn cells_for(&self, nodes: Vec<usize>) -> Vec<Cell<'t, T>> {
        nodes
            .into_iter()
            .map(|node| Cell {
                row: *self,
                column: self.table.column_at(node),
            })
            .collect()
    }
}

pub struct Cell<'t, T> {
    pub row: Row<'t, T>,
    pub column: Column<'t, T>,
}

impl<T> Cell<'_, T> {
    pub fn id(&self) -> String {
        format!("{}_{}", self.row.id, self.column.id())
    }

    /// Run the column's cell renderer, falling back to the accessor value.
    pub fn render(&self) -> Element {
        let cx = CellContext {
            table: self.row.table,
            row: &self.row,
            column: self.column,
        };
        match &self.column.def().cell {
            Some(render) => render(&cx),
            None => Element::text(cx.value().unwrap_or_default()),
        }
    }
}

impl<T> Table<T> {
    /// Every row of the data set, unpaginated.
    pub fn core_row_model(&self) -> Vec<Row<'_, T>> {
        self.options
            .data
            .iter()
            .zip(&self.row_ids)
            .enumerate()
            .map(|(index, (original, id))| Row {
                table: self,
                id: id.as_str(),
                index,
                original,
            })
            .collect()
    }

    /// Find a row by id anywhere in the data set.
    pub fn row(&self, id: &str) -> Option<Row<'_, T>> {
        let index = self.row_ids.iter().position(|row_id| row_id == id)?;
        Some(Row {
            table: self,
            id: self.row_ids[index].as_str(),
            index,
            original: &self.options.data[index],
        })
    }
}
