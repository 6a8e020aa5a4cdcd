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
//! Types that make up the game board.

pub use self::{
    cell::Cell,
    errors::{CannotPlaceReason, PlaceError},
    grid::{CellState, Grid},
    setup::BoardSetup,
    span::{Orientation, Span},
};

mod cell;
mod errors;
mod grid;
pub mod setup;
mod span;

/// Number of rows, and of columns, on the board.
pub const BOARD_SIZE: usize = 10;
