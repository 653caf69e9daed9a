//! Column pinning.

use super::column::Column;
use super::state::{ColumnPinningState, PinSide};
use super::Table;

impl<T> Column<'_, T> {
    /// Whether any leaf under this column allows pinning.
    pub fn can_pin(&self) -> bool {
        self.table.config().enable_column_pinning
            && self
                .leaf_columns()
                .iter()
                .any(|leaf| leaf.def().enable_pinning)
    }

    /// The side this column is pinned to. A group counts as pinned only when
    /// every leaf under it is pinned to the same side.
    pub fn is_pinned(&self) -> Option<PinSide> {
        let ids: Vec<&str> = self.leaf_columns().iter().map(|leaf| leaf.id()).collect();
        self.table.with_column_pinning(|pinning| {
            let all_in = |side: &[String]| ids.iter().all(|id| side.iter().any(|s| s == id));
            if all_in(&pinning.left) {
                Some(PinSide::Left)
            } else if all_in(&pinning.right) {
                Some(PinSide::Right)
            } else {
                None
            }
        })
    }

    /// Position of this column within its pinned side.
    pub fn pinned_index(&self) -> Option<usize> {
        let side = self.is_pinned()?;
        let id = self.id();
        self.table
            .with_column_pinning(|pinning| pinning.side(side).iter().position(|c| c == id))
    }

    /// Pin this column (all its leaves) to `side`, or unpin with `None`.
    ///
    /// Pinned leaves move to the end of the chosen side and are removed from
    /// the other, so a column is never listed on both sides.
    pub fn pin(&self, side: Option<PinSide>) {
        if !self.can_pin() {
            log::debug!("column '{}' cannot be pinned", self.id());
            return;
        }

        let ids: Vec<String> = self
            .leaf_columns()
            .iter()
            .map(|leaf| leaf.id().to_string())
            .collect();
        let mut next = self.table.with_column_pinning(Clone::clone);
        next.left.retain(|id| !ids.contains(id));
        next.right.retain(|id| !ids.contains(id));
        match side {
            Some(PinSide::Left) => next.left.extend(ids),
            Some(PinSide::Right) => next.right.extend(ids),
            None => {}
        }
        self.table.set_column_pinning(next);
    }
}

impl<T> Table<T> {
    pub fn is_some_columns_pinned(&self, side: Option<PinSide>) -> bool {
        self.with_column_pinning(|pinning| match side {
            Some(side) => !pinning.side(side).is_empty(),
            None => !pinning.is_empty(),
        })
    }

    pub fn reset_column_pinning(&self) {
        self.set_column_pinning(ColumnPinningState::default());
    }
}
