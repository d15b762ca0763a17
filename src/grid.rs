//! The cell grid every stage of the simulation consumes and produces.
//!
//! A [`Grid`] is an immutable rectangle of [`Cell`]s. Stages never mutate a
//! grid in place; they build a new one with [`Grid::from_fn`].

use std::fmt::{self, Debug, Display, Formatter};

use gridly::prelude::{Column, Columns, Grid as _, GridBounds, Location, Row, Rows, TOUCHING_ADJACENCIES};
use gridly_grids::VecGrid;
use lazy_format::lazy_format;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Cell {
    Dead,
    Alive,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Dead
    }
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Cell::Dead => '0',
            Cell::Alive => '1',
        }
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

/// A row whose length differs from the first row's.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("row {row} has {found} cells, expected {expected}")]
pub struct RaggedRowError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

/// A rectangular, row-major matrix of cells.
///
/// A grid with no rows or no columns is empty. [`Grid::empty`] is the
/// canonical empty grid (0×0); every other empty shape compares unequal to it
/// but behaves identically under [`Grid::is_empty`].
#[derive(Clone)]
pub struct Grid {
    cells: VecGrid<Cell>,
}

impl Grid {
    pub fn empty() -> Self {
        Self::dead(0, 0)
    }

    /// A grid of the given size with every cell dead.
    pub fn dead(rows: usize, columns: usize) -> Self {
        Self::from_fn(rows, columns, |_, _| Cell::Dead)
    }

    /// Build a grid by calling `cell(row, column)` for every position.
    pub fn from_fn(rows: usize, columns: usize, mut cell: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut cells: VecGrid<Cell> = VecGrid::new(Rows(rows as isize) + Columns(columns as isize))
            .expect("grid dimensions are non-negative");

        for row in 0..rows {
            for column in 0..columns {
                cells[(Row(row as isize), Column(column as isize))] = cell(row, column);
            }
        }

        Grid { cells }
    }

    /// Build a grid from rows of cells, rejecting rows that don't match the
    /// width of the first one.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, RaggedRowError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Cell>,
    {
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        let expected = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(RaggedRowError {
                row,
                expected,
                found,
            });
        }

        Ok(Self::from_fn(rows.len(), expected, |row, column| {
            rows[row][column]
        }))
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.cells.num_rows().0 as usize
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.cells.num_columns().0 as usize
    }

    /// `(rows, columns)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    /// True when no cell can exist: zero rows or zero columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0 || self.num_columns() == 0
    }

    #[inline]
    fn lookup(&self, location: Location) -> Cell {
        self.cells.get(location).ok().copied().unwrap_or_default()
    }

    /// Bounded lookup: the cell at `(row, column)`, or [`Cell::Dead`] if the
    /// position lies outside the grid. Coordinates are signed so callers can
    /// probe one step past any edge.
    #[inline]
    pub fn cell_at(&self, row: isize, column: isize) -> Cell {
        self.lookup(Row(row) + Column(column))
    }

    /// Number of live cells in the Moore neighborhood of `(row, column)`.
    /// Neighbors outside the grid count as dead.
    pub fn live_neighbors(&self, row: usize, column: usize) -> usize {
        let origin = Row(row as isize) + Column(column as isize);

        TOUCHING_ADJACENCIES
            .iter()
            .map(|offset| origin + offset)
            .filter(|&location| self.lookup(location).is_alive())
            .count()
    }

    pub fn population(&self) -> usize {
        self.cells
            .row_range()
            .cross(self.cells.column_range())
            .filter(|&location| self.cells[location].is_alive())
            .count()
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + Clone + '_ {
        let row = Row(row as isize);
        (0..self.num_columns()).map(move |column| self.cells[(row, Column(column as isize))])
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = Cell> + Clone + '_ {
        let column = Column(column as isize);
        (0..self.num_rows()).map(move |row| self.cells[(Row(row as isize), column)])
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + Clone + '_> + '_ {
        (0..self.num_rows()).map(move |row| self.row(row))
    }

    /// Copy out the cells in the given half-open row and column ranges.
    pub fn subgrid(&self, rows: std::ops::Range<usize>, columns: std::ops::Range<usize>) -> Self {
        assert!(rows.end <= self.num_rows(), "row range {:?} out of bounds", rows);
        assert!(columns.end <= self.num_columns(), "column range {:?} out of bounds", columns);

        Self::from_fn(rows.len(), columns.len(), |row, column| {
            self.cells[(
                Row((rows.start + row) as isize),
                Column((columns.start + column) as isize),
            )]
        })
    }

    /// The grid turned half a revolution: `(r, c)` moves to
    /// `(rows - 1 - r, columns - 1 - c)`.
    pub fn rotated_180(&self) -> Self {
        let (rows, columns) = self.dimensions();

        Self::from_fn(rows, columns, |row, column| {
            self.cell_at(
                (rows - 1 - row) as isize,
                (columns - 1 - column) as isize,
            )
        })
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self.rows().zip(other.rows()).all(|(lhs, rhs)| lhs.eq(rhs))
    }
}

impl Eq for Grid {}

/// One line per row, cells as `0`/`1`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let rows = lazy_format!("{row}\n" for row in self.rows().map(|row|
            lazy_format!("{cell}" for cell in row.clone())
        ));

        Display::fmt(&rows, f)
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Grid{:?} ", self.dimensions())?;
        f.debug_list()
            .entries(self.rows().map(|row| row.map(Cell::as_char).collect::<String>()))
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn arb_grid(
    max_rows: usize,
    max_columns: usize,
) -> impl proptest::strategy::Strategy<Value = Grid> {
    use proptest::prelude::*;

    (0..=max_rows, 0..=max_columns)
        .prop_flat_map(|(rows, columns)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), columns), rows)
        })
        .prop_map(|rows| {
            Grid::from_rows(rows.into_iter().map(|row| row.into_iter().map(Cell::from)))
                .expect("generated rows are rectangular")
        })
}

#[cfg(test)]
pub(crate) fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows.iter().map(|row| {
        row.chars().map(|c| match c {
            '1' => Cell::Alive,
            _ => Cell::Dead,
        })
    }))
    .expect("test grid is rectangular")
}
