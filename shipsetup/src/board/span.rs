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
//! Rectangular regions of the board.
use std::{cmp, fmt};

use crate::board::{Cell, BOARD_SIZE};

/// Direction a straight span runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Lies in a single row.
    Horizontal,
    /// Lies in a single column.
    Vertical,
}

/// Inclusive rectangle of cells, normalized so that `top_left` is never below or right
/// of `bottom_right`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    top_left: Cell,
    bottom_right: Cell,
}

impl Span {
    /// Build the span covering both cells. The cells may be given in any order.
    pub fn new(a: Cell, b: Cell) -> Self {
        Self {
            top_left: Cell::new_unchecked(
                cmp::min(a.row(), b.row()),
                cmp::min(a.column(), b.column()),
            ),
            bottom_right: Cell::new_unchecked(
                cmp::max(a.row(), b.row()),
                cmp::max(a.column(), b.column()),
            ),
        }
    }

    /// Upper left corner of the span.
    pub fn top_left(&self) -> Cell {
        self.top_left
    }

    /// Lower right corner of the span.
    pub fn bottom_right(&self) -> Cell {
        self.bottom_right
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.bottom_right.column() - self.top_left.column() + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.bottom_right.row() - self.top_left.row() + 1
    }

    /// The direction of a straight span, or `None` if it covers more than one row and
    /// more than one column. A single cell counts as horizontal.
    pub fn orientation(&self) -> Option<Orientation> {
        if self.height() == 1 {
            Some(Orientation::Horizontal)
        } else if self.width() == 1 {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }

    /// Length along the span's orientation, if it is straight.
    pub fn len(&self) -> Option<usize> {
        self.orientation().map(|orientation| match orientation {
            Orientation::Horizontal => self.width(),
            Orientation::Vertical => self.height(),
        })
    }

    /// Returns true if the cell lies inside the span.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.top_left.row()..=self.bottom_right.row()).contains(&cell.row())
            && (self.top_left.column()..=self.bottom_right.column()).contains(&cell.column())
    }

    /// Iterate the cells of the span, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        rect(
            self.top_left.row(),
            self.bottom_right.row(),
            self.top_left.column(),
            self.bottom_right.column(),
        )
    }

    /// Iterate the ring of cells touching the span, diagonals included. Cells past the
    /// edge of the board are skipped.
    pub fn border(&self) -> impl Iterator<Item = Cell> {
        let span = *self;
        rect(
            self.top_left.row().saturating_sub(1).max(1),
            cmp::min(self.bottom_right.row() + 1, BOARD_SIZE),
            self.top_left.column().saturating_sub(1).max(1),
            cmp::min(self.bottom_right.column() + 1, BOARD_SIZE),
        )
        .filter(move |&cell| !span.contains(cell))
    }
}

/// All cells in the inclusive, in-bounds rectangle given by row and column ranges.
fn rect(top: usize, bottom: usize, left: usize, right: usize) -> impl Iterator<Item = Cell> {
    (top..=bottom)
        .flat_map(move |row| (left..=right).map(move |column| Cell::new_unchecked(row, column)))
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.top_left, self.bottom_right)
    }
}
