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
//! Errors used by the [`BoardSetup`][crate::board::BoardSetup].

use thiserror::Error;

use crate::{board::Span, ships::Ship};

/// Reason why a ship could not be placed on a given span.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The span covers more than one row and more than one column.
    #[error("the ship must lie in a single row or a single column")]
    WrongLocation,
    /// The span is straight but does not match the ship's length.
    #[error("the span does not match the length of the ship")]
    WrongLength,
    /// The span touches an already placed ship, possibly only at a corner.
    #[error("the span touches another ship")]
    TooClose,
    /// The ship was already placed.
    #[error("ship was already placed")]
    AlreadyPlaced,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place the {ship} at {span}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
    span: Span,
}

impl PlaceError {
    /// Construct a placement error from a reason, ship, and span.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship, span: Span) -> Self {
        Self { reason, ship, span }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The ship that was being placed.
    pub fn ship(&self) -> Ship {
        self.ship
    }

    /// The normalized span where placement was attempted.
    pub fn span(&self) -> &Span {
        &self.span
    }
}
