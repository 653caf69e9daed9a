//! Header groups.
//!
//! Each section (left, center, right) is laid out separately from its own
//! leaf columns, then the rows are concatenated. A group column spans the
//! consecutive leaves it covers within a section; a leaf shallower than the
//! deepest column gets placeholder headers above its own header.

use std::fmt;

use tabledom::Element;

use super::column::{Column, HeaderContext, Section};
use super::Table;

pub struct HeaderGroup<'t, T> {
    pub id: String,
    pub depth: usize,
    pub headers: Vec<Header<'t, T>>,
}

pub struct Header<'t, T> {
    pub(super) table: &'t Table<T>,
    pub id: String,
    pub depth: usize,
    /// Position within its header group.
    pub index: usize,
    pub col_span: u16,
    pub is_placeholder: bool,
    pub section: Section,
    pub(super) node: usize,
    pub(super) leaves: Vec<usize>,
    /// Index of the first covered leaf within the section.
    pub(super) leaf_offset: usize,
}

impl<T> fmt::Debug for Header<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("id", &self.id)
            .field("col_span", &self.col_span)
            .field("is_placeholder", &self.is_placeholder)
            .field("section", &self.section)
            .finish()
    }
}

impl<'t, T> Header<'t, T> {
    /// The column this header belongs to. For placeholders, the leaf column
    /// underneath.
    pub fn column(&self) -> Column<'t, T> {
        self.table.column_at(self.node)
    }

    /// Ids of the leaf columns this header spans.
    pub fn leaf_column_ids(&self) -> Vec<&'t str> {
        self.leaves
            .iter()
            .map(|&node| self.table.nodes[node].id.as_str())
            .collect()
    }

    /// Run the column's header renderer. Placeholders render nothing.
    pub fn render(&self) -> Option<Element> {
        if self.is_placeholder {
            return None;
        }
        let column = self.column();
        let cx = HeaderContext {
            table: self.table,
            header: self,
            column,
        };
        Some(match &column.def().header {
            Some(render) => render(&cx),
            None => Element::text(column.id()),
        })
    }
}

impl<T> Table<T> {
    /// All header rows: left, center and right sections side by side.
    pub fn header_groups(&self) -> Vec<HeaderGroup<'_, T>> {
        let left = self.left_header_groups();
        let center = self.center_header_groups();
        let right = self.right_header_groups();

        left.into_iter()
            .zip(center)
            .zip(right)
            .map(|((left, center), right)| {
                let mut headers = left.headers;
                headers.extend(center.headers);
                headers.extend(right.headers);
                for (index, header) in headers.iter_mut().enumerate() {
                    header.index = index;
                }
                HeaderGroup {
                    id: left.depth.to_string(),
                    depth: left.depth,
                    headers,
                }
            })
            .collect()
    }

    pub fn left_header_groups(&self) -> Vec<HeaderGroup<'_, T>> {
        self.build_header_groups(Section::Left)
    }

    pub fn center_header_groups(&self) -> Vec<HeaderGroup<'_, T>> {
        self.build_header_groups(Section::Center)
    }

    pub fn right_header_groups(&self) -> Vec<HeaderGroup<'_, T>> {
        self.build_header_groups(Section::Right)
    }

    /// The bottom header row: one header per visible leaf column.
    pub fn leaf_headers(&self) -> Vec<Header<'_, T>> {
        self.header_groups()
            .pop()
            .map(|group| group.headers)
            .unwrap_or_default()
    }

    /// Find a header by id across all header rows.
    pub fn header(&self, id: &str) -> Option<Header<'_, T>> {
        self.header_groups()
            .into_iter()
            .flat_map(|group| group.headers)
            .find(|header| header.id == id)
    }

    fn build_header_groups(&self, section: Section) -> Vec<HeaderGroup<'_, T>> {
        let leaves = self.section_leaves(section);
        let prefix = match section {
            Section::Left => "left_",
            Section::Center => "",
            Section::Right => "right_",
        };

        (0..=self.max_depth)
            .map(|depth| {
                let mut headers: Vec<Header<'_, T>> = Vec::new();

                for (offset, &leaf) in leaves.iter().enumerate() {
                    let leaf_depth = self.nodes[leaf].depth;
                    let (node, is_placeholder) = if depth < leaf_depth {
                        (self.ancestor_at(leaf, depth), false)
                    } else {
                        (leaf, depth < self.max_depth)
                    };

                    if !is_placeholder
                        && let Some(last) = headers.last_mut()
                        && !last.is_placeholder
                        && last.node == node
                    {
                        last.col_span += 1;
                        last.leaves.push(leaf);
                        continue;
                    }

                    let column_id = &self.nodes[node].id;
                    let id = if is_placeholder {
                        format!("{prefix}{depth}_{column_id}_placeholder")
                    } else {
                        format!("{prefix}{depth}_{column_id}")
                    };
                    headers.push(Header {
                        table: self,
                        id,
                        depth,
                        index: headers.len(),
                        col_span: 1,
                        is_placeholder,
                        section,
                        node,
                        leaves: vec![leaf],
                        leaf_offset: offset,
                    });
                }

                HeaderGroup {
                    id: format!("{prefix}{depth}"),
                    depth,
                    headers,
                }
            })
            .collect()
    }

    fn ancestor_at(&self, node: usize, depth: usize) -> usize {
        let mut current = node;
        while self.nodes[current].depth > depth {
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }
}
