use std::fmt::Display;

use joinery::prelude::*;
use lazy_format::lazy_format;

use crate::grid::Grid;

/// Format one generation for output: a `[0, 1, 1]` line per row, then a blank
/// line separating it from the next generation. An extinct grid with no rows
/// renders as a single `[]` line.
pub fn render(grid: &Grid) -> impl Display + '_ {
    let extinct = if grid.num_rows() == 0 { "[]\n" } else { "" };
    let rows = lazy_format!("[{row}]\n" for row in grid.rows().map(|row| row.join_with(", ")));

    lazy_format!("{}{}\n", extinct, rows)
}
