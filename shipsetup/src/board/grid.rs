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
//! The board's cell-state matrix and its text rendering.

use std::{fmt, ops::Index};

use crate::board::{cell::row_label, Cell, Span, BOARD_SIZE};

/// State of a single square of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Open water, or at least nothing known to be there.
    Fog,
    /// Occupied by a ship.
    Ship,
    /// A ship that has been shot.
    Hit,
    /// Open water that has been shot.
    Miss,
}

impl CellState {
    /// Character this state is drawn with.
    pub fn symbol(self) -> char {
        match self {
            CellState::Fog => '~',
            CellState::Ship => 'O',
            CellState::Hit => 'X',
            CellState::Miss => 'M',
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Fog
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.symbol())
    }
}

/// 10x10 grid of [`CellState`]s. Axis labels are not part of the grid; they are only
/// produced when rendering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Cells in row-major order.
    cells: Box<[CellState]>,
}

impl Grid {
    /// Create a grid covered in fog.
    pub fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Convert a cell to its index in `cells`. Every [`Cell`] is on the board, so this
    /// cannot fail.
    #[inline]
    fn linearize(cell: Cell) -> usize {
        (cell.row() - 1) * BOARD_SIZE + (cell.column() - 1)
    }

    /// Get the state of the given cell.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[Self::linearize(cell)]
    }

    /// Returns true if any ship touches the span, including at a corner. Cells inside
    /// the span itself are not considered.
    pub fn is_too_close(&self, span: &Span) -> bool {
        span.border().any(|cell| self[cell] == CellState::Ship)
    }

    /// Mark every cell in the span as occupied. Performs no validation.
    pub fn set_ship(&mut self, span: &Span) {
        for cell in span.cells() {
            self.cells[Self::linearize(cell)] = CellState::Ship;
        }
    }

    /// Count the cells occupied by ships.
    pub fn ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == CellState::Ship)
            .count()
    }

    /// Get an iterator over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Cell> for Grid {
    type Output = CellState;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.cells[Self::linearize(cell)]
    }
}

impl fmt::Display for Grid {
    /// Draws the column numbers across the top and a row letter before each row, with
    /// every symbol separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(" ")?;
        for column in 1..=BOARD_SIZE {
            write!(f, " {}", column)?;
        }
        writeln!(f)?;
        for (i, row) in self.iter_rows().enumerate() {
            write!(f, "{}", row_label(i + 1))?;
            for state in row {
                write!(f, " {}", state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(a: (usize, usize), b: (usize, usize)) -> Span {
        Span::new(Cell::new(a.0, a.1), Cell::new(b.0, b.1))
    }

    #[test]
    fn new_grid_is_fog() {
        let grid = Grid::new();
        assert_eq!(grid.ship_cells(), 0);
        assert!(grid
            .iter_rows()
            .all(|row| row.len() == BOARD_SIZE && row.iter().all(|&s| s == CellState::Fog)));
        assert_eq!(grid.iter_rows().count(), BOARD_SIZE);
    }

    #[test]
    fn set_ship_marks_span_only() {
        let mut grid = Grid::new();
        grid.set_ship(&span((3, 2), (3, 4)));
        assert_eq!(grid.ship_cells(), 3);
        assert_eq!(grid[Cell::new(3, 2)], CellState::Ship);
        assert_eq!(grid.get(Cell::new(3, 4)), CellState::Ship);
        assert_eq!(grid[Cell::new(3, 5)], CellState::Fog);
        assert_eq!(grid[Cell::new(2, 2)], CellState::Fog);
    }

    #[test]
    fn too_close_counts_diagonals() {
        let mut grid = Grid::new();
        grid.set_ship(&span((2, 2), (2, 2)));
        assert!(grid.is_too_close(&span((1, 1), (1, 1))));
        assert!(grid.is_too_close(&span((3, 3), (3, 5))));
        assert!(grid.is_too_close(&span((1, 2), (1, 2))));
        assert!(!grid.is_too_close(&span((4, 1), (4, 5))));
        assert!(!grid.is_too_close(&span((1, 4), (5, 4))));
    }

    #[test]
    fn too_close_ignores_cells_inside_span() {
        let mut grid = Grid::new();
        grid.set_ship(&span((5, 5), (5, 5)));
        assert!(!grid.is_too_close(&span((5, 5), (5, 5))));
    }

    #[test]
    fn render_empty() {
        let rendered = Grid::new().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  1 2 3 4 5 6 7 8 9 10");
        assert_eq!(lines[1], "A ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
        assert_eq!(lines[10], "J ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    }

    #[test]
    fn render_ship() {
        let mut grid = Grid::new();
        grid.set_ship(&span((1, 1), (1, 5)));
        let rendered = grid.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[1], "A O O O O O ~ ~ ~ ~ ~");
        assert_eq!(lines[2], "B ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    }
}
