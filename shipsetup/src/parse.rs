// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Parsing of coordinates typed by the player.
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::board::Cell;

/// Matcher for a pair of coordinates such as `A1 A5`.
static COORDINATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<from_row>[A-J])(?P<from_column>[0-9]{1,2})
        \s+
        (?P<to_row>[A-J])(?P<to_column>[0-9]{1,2})$",
    )
    .unwrap()
});

/// Matcher for a single coordinate such as `J10`.
static COORDINATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<row>[A-J])(?P<column>[0-9]{1,2})$").unwrap());

/// Error returned when text is not in the coordinate format.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// Expected two coordinates separated by whitespace.
    #[error("{0:?} is not a pair of coordinates like \"A1 A5\"")]
    InvalidCoordinates(String),
    /// Expected one coordinate.
    #[error("{0:?} is not a coordinate like \"B7\"")]
    InvalidCell(String),
}

/// Parse a line containing two coordinates, returning the cells in the order they were
/// typed. Only the line terminator is stripped; any other deviation from the format,
/// including a column outside `1..=10`, rejects the whole line.
pub fn parse_coordinates(line: &str) -> Result<(Cell, Cell), ParseError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    COORDINATES
        .captures(line)
        .and_then(|captures| {
            let from = cell_from(&captures, "from_row", "from_column")?;
            let to = cell_from(&captures, "to_row", "to_column")?;
            Some((from, to))
        })
        .ok_or_else(|| ParseError::InvalidCoordinates(line.to_owned()))
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COORDINATE
            .captures(s)
            .and_then(|captures| cell_from(&captures, "row", "column"))
            .ok_or_else(|| ParseError::InvalidCell(s.to_owned()))
    }
}

/// Build a cell from the named row-letter and column groups of a match.
fn cell_from(captures: &Captures, row: &str, column: &str) -> Option<Cell> {
    let row = captures.name(row)?.as_str().bytes().next()?;
    let column = captures.name(column)?.as_str().parse().ok()?;
    Cell::try_new((row - b'A') as usize + 1, column)
}
