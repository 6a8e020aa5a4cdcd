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
//! Interactive placement of the whole fleet over a line-oriented text interface.
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    board::{BoardSetup, CannotPlaceReason, Span},
    parse::parse_coordinates,
    ships::Ship,
};

const FORMAT_ERROR: &str = "Error! Invalid format";
const LOCATION_ERROR: &str = "Error! Wrong ship location! Try again:";
const TOO_CLOSE_ERROR: &str = "Error! You placed it too close to another one. Try again:";

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Clear the string buffer and read one line. Running out of input is reported as
    /// [`io::ErrorKind::UnexpectedEof`], since there is nothing left to answer the prompt.
    pub fn read_line(&mut self) -> io::Result<&str> {
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all ships were placed",
            ));
        }
        Ok(&self.buf)
    }
}

/// Walks the player through placing each ship of the fleet in turn, re-prompting until
/// each placement is valid.
pub struct PlacementSession<B, W> {
    input: InputReader<B>,
    output: W,
    setup: BoardSetup,
}

impl<B: BufRead, W: Write> PlacementSession<B, W> {
    /// Start a session with an empty board.
    pub fn new(input: B, output: W) -> Self {
        Self::with_setup(input, output, BoardSetup::new())
    }

    /// Continue placing on a board where some ships may already be placed.
    pub fn with_setup(input: B, output: W, setup: BoardSetup) -> Self {
        Self {
            input: InputReader::new(input),
            output,
            setup,
        }
    }

    /// The board as placed so far.
    pub fn setup(&self) -> &BoardSetup {
        &self.setup
    }

    /// Show the board, then place every pending ship in [`Ship::ALL`] order, showing the
    /// board again after each one. Returns the finished board.
    pub fn run(mut self) -> io::Result<BoardSetup> {
        self.show_grid()?;
        let pending: Vec<Ship> = self.setup.pending_ships().collect();
        for ship in pending {
            self.place(ship)?;
            self.show_grid()?;
        }
        info!(ship_cells = self.setup.grid().ship_cells(), "fleet placed");
        Ok(self.setup)
    }

    /// Prompt for one ship and keep reading lines until one of them places it. A ship
    /// that is already on the board is reported as [`io::ErrorKind::InvalidInput`].
    fn place(&mut self, ship: Ship) -> io::Result<Span> {
        write!(
            self.output,
            "\nEnter the coordinates of the {} ({} cells):\n\n",
            ship,
            ship.len()
        )?;
        self.output.flush()?;
        loop {
            let (a, b) = match parse_coordinates(self.input.read_line()?) {
                Ok(cells) => cells,
                Err(err) => {
                    debug!(%err, "rejected input");
                    self.report(FORMAT_ERROR)?;
                    continue;
                }
            };
            match self.setup.place(ship, a, b) {
                Ok(span) => {
                    info!(%ship, %span, "ship placed");
                    return Ok(span);
                }
                Err(err) => {
                    debug!(%err, "rejected placement");
                    match err.reason() {
                        CannotPlaceReason::WrongLocation => self.report(LOCATION_ERROR)?,
                        CannotPlaceReason::WrongLength => self.report(&format!(
                            "Error! Wrong length of the {}! Try again:",
                            ship
                        ))?,
                        CannotPlaceReason::TooClose => self.report(TOO_CLOSE_ERROR)?,
                        CannotPlaceReason::AlreadyPlaced => {
                            return Err(io::Error::new(io::ErrorKind::InvalidInput, err))
                        }
                    }
                }
            }
        }
    }

    /// Print out the board as placed so far.
    fn show_grid(&mut self) -> io::Result<()> {
        write!(self.output, "\n{}", self.setup.grid())?;
        self.output.flush()
    }

    fn report(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "\n{}\n\n", message)?;
        self.output.flush()
    }
}
