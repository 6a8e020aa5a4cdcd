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
use std::fmt;

use crate::board::BOARD_SIZE;

/// A single square of the board, addressed the way the player types it: a row letter
/// `A`-`J` and a column number `1`-`10`. Both parts are stored 1-indexed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// Construct a [`Cell`] from a 1-indexed `row` and `column`.
    /// Panics if either is outside `1..=10`.
    pub fn new(row: usize, column: usize) -> Self {
        match Self::try_new(row, column) {
            Some(cell) => cell,
            None => panic!(
                "Cell must be in 1..={} on both axes, got ({}, {})",
                BOARD_SIZE, row, column
            ),
        }
    }

    /// Construct a [`Cell`] from a 1-indexed `row` and `column`.
    /// Returns `None` if either is outside `1..=10`.
    pub fn try_new(row: usize, column: usize) -> Option<Self> {
        if in_bounds(row) && in_bounds(column) {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Only for coordinates already known to be on the board.
    pub(super) fn new_unchecked(row: usize, column: usize) -> Self {
        debug_assert!(in_bounds(row) && in_bounds(column));
        Self { row, column }
    }

    /// Row of the cell, `1` for `A` through `10` for `J`.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the cell, `1` through `10`.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The letter labelling this cell's row.
    pub fn row_label(&self) -> char {
        row_label(self.row)
    }
}

#[inline]
fn in_bounds(v: usize) -> bool {
    (1..=BOARD_SIZE).contains(&v)
}

/// Letter used for the given 1-indexed row.
pub(super) fn row_label(row: usize) -> char {
    (b'A' + (row - 1) as u8) as char
}

impl From<Cell> for (usize, usize) {
    /// Convert the [`Cell`] into a `(row, column)` pair.
    fn from(cell: Cell) -> Self {
        (cell.row, cell.column)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.column)
    }
}
