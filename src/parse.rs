//! Reading a starting grid and a generation count from text.
//!
//! Rows are separated by `R` (`011R110R010`) or by line breaks; each row is a
//! run of `0`/`1` characters and every row must be the same length.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::grid::{Cell, Grid, RaggedRowError};

lazy_static! {
    static ref ROW_DELIMITER: Regex = Regex::new(r"\s*(?:R|\r?\n)\s*").expect("Regex syntax error");
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("no rows in cell description")]
    NoRows,

    #[error("invalid cell {found:?} at row {row}, column {column}: expected '0' or '1'")]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },

    #[error(transparent)]
    RaggedRow(#[from] RaggedRowError),

    #[error("invalid generation count {0:?}: expected a non-negative integer")]
    InvalidGenerations(String),
}

fn parse_cell(row: usize, column: usize, c: char) -> Result<Cell, ParseError> {
    match c {
        '0' => Ok(Cell::Dead),
        '1' => Ok(Cell::Alive),
        found => Err(ParseError::InvalidCell { row, column, found }),
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<Cell>, ParseError> {
    line.chars()
        .enumerate()
        .map(|(column, c)| parse_cell(row, column, c))
        .collect()
}

/// Parse a grid. Blank rows are only skipped at the very start and end of
/// the input; an empty row between two others is a ragged row.
pub fn parse_grid(input: &str) -> Result<Grid, ParseError> {
    let lines: Vec<&str> = ROW_DELIMITER.split(input.trim()).collect();

    let first = lines.iter().position(|line| !line.is_empty()).ok_or(ParseError::NoRows)?;
    let last = lines.iter().rposition(|line| !line.is_empty()).ok_or(ParseError::NoRows)?;

    let rows = lines[first..=last]
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(row, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(rows)?)
}

pub fn parse_generations(input: &str) -> Result<usize, ParseError> {
    let input = input.trim();

    input
        .parse()
        .map_err(|_| ParseError::InvalidGenerations(input.to_owned()))
}

impl FromStr for Grid {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Grid, ParseError> {
        parse_grid(s)
    }
}
