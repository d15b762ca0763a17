//! Conway's Game of Life on an unbounded plane.
//!
//! Each generation pads the grid with a ring of dead cells, applies the
//! B3/S23 rule, and trims back to the bounding box of live cells.

pub mod config;
pub mod grid;
pub mod pad;
pub mod parse;
pub mod render;
pub mod rule;
pub mod simulate;
pub mod trim;

pub use grid::{Cell, Grid, RaggedRowError};
pub use pad::pad;
pub use parse::{parse_generations, parse_grid, ParseError};
pub use render::render;
pub use rule::{next_state, step};
pub use simulate::{advance, run, simulate, Simulation};
pub use trim::{trim, trim_columns, trim_rows};
