//! Inline style for pinned and unpinned columns.

use tabledom::{BoxShadow, Color, Position, Style};

use crate::table::{Column, PinSide, Section};

/// Stacking order of pinned columns, above the scrolling ones at 0.
pub const PINNED_Z_INDEX: i16 = 1;
pub const BASE_Z_INDEX: i16 = 0;

/// Resolve the inline style shared by a column's header and body cells.
///
/// Pinned columns stick at their offset within the pinned group and render
/// opaque above scrolled content. The boundary column of each pinned group
/// (last on the left, first on the right) casts an inset shadow towards the
/// scrolling area.
pub fn column_style<T>(column: &Column<'_, T>) -> Style {
    let pinned = column.is_pinned();
    let is_last_left = pinned == Some(PinSide::Left) && column.is_last_column(Section::Left);
    let is_first_right = pinned == Some(PinSide::Right) && column.is_first_column(Section::Right);

    let mut style = Style::new();

    if is_last_left {
        style = style.box_shadow(BoxShadow::new(-4, 0, 4, -4, Color::named("gray")).inset());
    } else if is_first_right {
        style = style.box_shadow(BoxShadow::new(4, 0, 4, -4, Color::named("gray")).inset());
    }

    style = style.position(if pinned.is_some() {
        Position::Sticky
    } else {
        Position::Relative
    });

    match pinned {
        Some(PinSide::Left) => style = style.left(column.start(Section::Left)),
        Some(PinSide::Right) => style = style.right(column.after(Section::Right)),
        None => {}
    }

    style = style.width(column.size());

    if pinned.is_some() {
        style.opacity(1.0).z_index(PINNED_Z_INDEX)
    } else {
        style.z_index(BASE_Z_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::table::{ColumnDef, ColumnPinningState, Table, TableOptions, TableState};
    use crate::State;

    fn table(left: &[&str], right: &[&str]) -> Table<()> {
        let columns: Vec<ColumnDef<()>> = ["a", "b", "c", "d", "e"]
            .iter()
            .enumerate()
            .map(|(i, id)| ColumnDef::display(*id).size(20.0 * (i as f64 + 1.0)))
            .collect();
        let state = State::new(TableState {
            column_pinning: ColumnPinningState::new(left.iter().copied(), right.iter().copied()),
            ..Default::default()
        });
        Table::new(TableOptions::new(Arc::new(vec![()]), columns).state(state))
    }

    #[test]
    fn test_boundary_shadows() {
        let table = table(&["a", "b"], &["d", "e"]);
        let style = |id| column_style(&table.column(id).unwrap());

        assert_eq!(style("a").box_shadow, None);
        assert_eq!(
            style("b").box_shadow.unwrap().to_string(),
            "-4px 0 4px -4px gray inset"
        );
        assert_eq!(style("c").box_shadow, None);
        assert_eq!(
            style("d").box_shadow.unwrap().to_string(),
            "4px 0 4px -4px gray inset"
        );
        assert_eq!(style("e").box_shadow, None);
    }

    #[test]
    fn test_offsets_accumulate_within_each_side() {
        let table = table(&["c", "a"], &["b", "e"]);
        let style = |id| column_style(&table.column(id).unwrap());

        // Left group in pinning order: c (60) then a (20).
        assert_eq!(style("c").left, Some(0.0));
        assert_eq!(style("a").left, Some(60.0));
        // Right group: b (40) then e (100); offsets count from the right edge.
        assert_eq!(style("b").right, Some(100.0));
        assert_eq!(style("e").right, Some(0.0));
        assert_eq!(style("a").right, None);
        assert_eq!(style("b").left, None);
    }

    #[test]
    fn test_unpinned_column() {
        let table = table(&["a"], &[]);
        let style = column_style(&table.column("c").unwrap());

        assert_eq!(style.position, Some(Position::Relative));
        assert_eq!(style.left, None);
        assert_eq!(style.right, None);
        assert_eq!(style.opacity, None);
        assert_eq!(style.z_index, Some(BASE_Z_INDEX));
        assert_eq!(style.width, Some(60.0));
    }

    #[test]
    fn test_pinned_column_is_sticky_and_opaque() {
        let table = table(&[], &["c"]);
        let style = column_style(&table.column("c").unwrap());

        assert_eq!(style.position, Some(Position::Sticky));
        assert_eq!(style.opacity, Some(1.0));
        assert_eq!(style.z_index, Some(PINNED_Z_INDEX));
    }
}
