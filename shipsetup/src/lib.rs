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
//! Rules for placing the classic five-ship Battleship fleet on a 10x10 board.
//!
//! [`board`] holds the grid and the placement rules: ships lie in a single row or
//! column, match their length exactly, and never touch another ship, not even at a
//! corner. [`parse`] reads coordinates such as `A1 A5`, and [`session`] drives the
//! prompt, validate and retry loop over any line-oriented reader and writer.

pub mod board;
pub mod parse;
pub mod session;
pub mod ships;

pub use board::{BoardSetup, Cell, Grid, Span};
pub use parse::{parse_coordinates, ParseError};
pub use session::PlacementSession;
pub use ships::Ship;
