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
//! Implements the setup phase of the board.
use std::collections::HashMap;

use tracing::debug;

use crate::{
    board::{CannotPlaceReason, Cell, Grid, PlaceError, Span},
    ships::Ship,
};

/// Setup phase for a board. Tracks where each ship of the fleet has been placed.
///
/// Placements are final: once a ship is on the grid it stays there, and its cells never
/// go back to fog.
#[derive(Debug, Clone, Default)]
pub struct BoardSetup {
    /// Grid ships are being placed into.
    grid: Grid,

    /// Spans of the ships placed so far.
    placements: HashMap<Ship, Span>,
}

impl BoardSetup {
    /// Begin setup with an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid with every ship placed so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Check whether `ship` could be placed between the two cells, given in any order.
    /// Returns the normalized span the ship would occupy. Does not check whether the ship
    /// itself was already placed.
    pub fn check_placement(&self, ship: Ship, a: Cell, b: Cell) -> Result<Span, PlaceError> {
        let span = Span::new(a, b);
        let fail = |reason| Err(PlaceError::new(reason, ship, span));
        let len = match span.len() {
            Some(len) => len,
            None => return fail(CannotPlaceReason::WrongLocation),
        };
        if len != ship.len() {
            fail(CannotPlaceReason::WrongLength)
        } else if self.grid.is_too_close(&span) {
            fail(CannotPlaceReason::TooClose)
        } else {
            Ok(span)
        }
    }

    /// Attempts to place the ship between the two cells. On success the ship's cells are
    /// marked on the grid and the normalized span is returned.
    pub fn place(&mut self, ship: Ship, a: Cell, b: Cell) -> Result<Span, PlaceError> {
        if self.placements.contains_key(&ship) {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyPlaced,
                ship,
                Span::new(a, b),
            ));
        }
        let span = self.check_placement(ship, a, b)?;
        self.grid.set_ship(&span);
        self.placements.insert(ship, span);
        debug!(%ship, %span, "ship committed to grid");
        Ok(span)
    }

    /// If the ship is placed, get its span. Otherwise return `None`.
    pub fn placement(&self, ship: Ship) -> Option<&Span> {
        self.placements.get(&ship)
    }

    /// Get an iterator over the ships which still need to be placed, in placement order.
    pub fn pending_ships(&self) -> impl '_ + Iterator<Item = Ship> {
        Ship::ALL
            .iter()
            .copied()
            .filter(move |ship| !self.placements.contains_key(ship))
    }

    /// Returns `true` once every ship of the fleet is placed.
    pub fn ready(&self) -> bool {
        self.pending_ships().next().is_none()
    }
}
