//! Shrinking a grid to the bounding box of its live cells.
//!
//! Rows and columns are trimmed in two independent passes. A grid with no
//! live cells at all trims to [`Grid::empty`].

use crate::grid::Grid;

/// Reduce `grid` to its minimal bounding box: afterwards the first and last
/// row and column each hold at least one live cell, or the grid is
/// [`Grid::empty`].
pub fn trim(grid: &Grid) -> Grid {
    trim_columns(&trim_rows(grid))
}

/// Drop leading and trailing rows that are entirely dead.
pub fn trim_rows(grid: &Grid) -> Grid {
    let is_live = |&row: &usize| grid.row(row).any(|cell| cell.is_alive());
    let rows = 0..grid.num_rows();

    match (rows.clone().find(is_live), rows.rev().find(is_live)) {
        (Some(first), Some(last)) => grid.subgrid(first..last + 1, 0..grid.num_columns()),
        _ => Grid::empty(),
    }
}

/// Drop leading and trailing columns that are entirely dead.
pub fn trim_columns(grid: &Grid) -> Grid {
    let is_live = |&column: &usize| grid.column(column).any(|cell| cell.is_alive());
    let columns = 0..grid.num_columns();

    match (columns.clone().find(is_live), columns.rev().find(is_live)) {
        (Some(first), Some(last)) => grid.subgrid(0..grid.num_rows(), first..last + 1),
        _ => Grid::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{arb_grid, grid};
    use proptest::prelude::*;

    #[test]
    fn trims_every_side() {
        let g = grid(&["00000", "00100", "01010", "00000", "00000"]);

        assert_eq!(trim(&g), grid(&["010", "101"]));
    }

    #[test]
    fn rows_and_columns_are_independent() {
        let g = grid(&["000", "100", "000"]);

        assert_eq!(trim_rows(&g), grid(&["100"]));
        assert_eq!(trim_columns(&g), grid(&["0", "1", "0"]));
        assert_eq!(trim_columns(&trim_rows(&g)), trim_rows(&trim_columns(&g)));
    }

    #[test]
    fn first_and_last_live_lines_found_from_both_ends() {
        let g = grid(&["0000", "0010", "0000", "0100", "0000"]);

        assert_eq!(trim_rows(&g), grid(&["0010", "0000", "0100"]));
        assert_eq!(trim_columns(&g), grid(&["00", "01", "00", "10", "00"]));
        assert_eq!(trim(&grid(&["000", "010", "000"])), grid(&["1"]));
    }

    #[test]
    fn interior_dead_lines_stay() {
        let g = grid(&["101", "000", "101"]);

        assert_eq!(trim(&g), g);
    }

    #[test]
    fn all_dead_becomes_empty() {
        assert_eq!(trim(&grid(&["000", "000"])), Grid::empty());
        assert_eq!(trim_rows(&grid(&["00"])), Grid::empty());
        assert_eq!(trim_columns(&grid(&["00"])), Grid::empty());
    }

    #[test]
    fn empty_shapes_trim_to_canonical_empty() {
        assert_eq!(trim(&Grid::empty()), Grid::empty());
        assert_eq!(trim(&Grid::dead(1, 0)), Grid::empty());
        assert_eq!(trim(&Grid::dead(0, 3)), Grid::empty());
    }

    proptest! {
        #[test]
        fn trim_is_idempotent(g in arb_grid(8, 8)) {
            let once = trim(&g);

            prop_assert_eq!(trim(&once), once);
        }

        #[test]
        fn trim_is_minimal(g in arb_grid(8, 8)) {
            let trimmed = trim(&g);
            prop_assert_eq!(trimmed.population(), g.population());

            if g.population() == 0 {
                prop_assert_eq!(trimmed, Grid::empty());
            } else {
                let (rows, columns) = trimmed.dimensions();

                prop_assert!(trimmed.row(0).any(|cell| cell.is_alive()));
                prop_assert!(trimmed.row(rows - 1).any(|cell| cell.is_alive()));
                prop_assert!(trimmed.column(0).any(|cell| cell.is_alive()));
                prop_assert!(trimmed.column(columns - 1).any(|cell| cell.is_alive()));
            }
        }
    }
}
