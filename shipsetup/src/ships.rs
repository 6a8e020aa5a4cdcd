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
//! The fixed fleet that gets placed on the board.
use std::fmt;

/// Ship ID for the placement game. Each player places exactly one of each.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ship {
    /// Aircraft Carrier: length 5.
    AircraftCarrier,
    /// Battleship: length 4.
    Battleship,
    /// Submarine: length 3.
    Submarine,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
}

impl Ship {
    /// All ships, in the order they are placed.
    pub const ALL: &'static [Ship] = &[
        Ship::AircraftCarrier,
        Ship::Battleship,
        Ship::Submarine,
        Ship::Cruiser,
        Ship::Destroyer,
    ];

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            Ship::AircraftCarrier => 5,
            Ship::Battleship => 4,
            Ship::Submarine => 3,
            Ship::Cruiser => 3,
            Ship::Destroyer => 2,
        }
    }

    /// Get the name shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            Ship::AircraftCarrier => "Aircraft Carrier",
            Ship::Battleship => "Battleship",
            Ship::Submarine => "Submarine",
            Ship::Cruiser => "Cruiser",
            Ship::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
