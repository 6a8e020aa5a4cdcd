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
use std::io::{Cursor, ErrorKind, Read};

use shipsetup::{board::CellState, BoardSetup, PlacementSession, Ship};

const HEADER: &str = "  1 2 3 4 5 6 7 8 9 10";

fn run(input: &str) -> (std::io::Result<BoardSetup>, String) {
    let mut output = Vec::new();
    let result = PlacementSession::new(Cursor::new(input), &mut output).run();
    (result, String::from_utf8(output).unwrap())
}

fn prompt(ship: Ship) -> String {
    format!(
        "\nEnter the coordinates of the {} ({} cells):\n\n",
        ship.name(),
        ship.len()
    )
}

#[test]
fn places_fleet_from_five_lines() {
    let mut input = Cursor::new("A1 A5\nC1 C4\nE1 E3\nG1 G3\nI1 I2\nleftover\n");
    let mut output = Vec::new();
    let setup = PlacementSession::new(&mut input, &mut output)
        .run()
        .unwrap();

    assert!(setup.ready());
    assert_eq!(setup.grid().ship_cells(), 17);

    let mut rest = String::new();
    input.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "leftover\n");

    let rows: Vec<String> = setup
        .grid()
        .iter_rows()
        .map(|row| row.iter().map(|state| state.symbol()).collect())
        .collect();
    assert_eq!(rows[0], "OOOOO~~~~~");
    assert_eq!(rows[1], "~~~~~~~~~~");
    assert_eq!(rows[2], "OOOO~~~~~~");
    assert_eq!(rows[4], "OOO~~~~~~~");
    assert_eq!(rows[6], "OOO~~~~~~~");
    assert_eq!(rows[8], "OO~~~~~~~~");
    assert_eq!(rows[9], "~~~~~~~~~~");

    let text = String::from_utf8(output).unwrap();
    // Once before the first ship and once after each ship.
    assert_eq!(text.matches(HEADER).count(), 6);
    assert!(text.starts_with(&format!("\n{}\nA ~ ~ ~ ~ ~ ~ ~ ~ ~ ~\n", HEADER)));
    assert!(text.ends_with("I O O ~ ~ ~ ~ ~ ~ ~ ~\nJ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~\n"));
    let mut from = 0;
    for &ship in Ship::ALL {
        let at = text[from..]
            .find(&prompt(ship))
            .unwrap_or_else(|| panic!("missing prompt for {}", ship));
        from += at;
    }
    assert!(!text.contains("Error!"));
}

#[test]
fn no_two_ships_touch() {
    let (result, _) = run("A1 A5\nC1 C4\nE1 E3\nG1 G3\nI1 I2\n");
    let setup = result.unwrap();
    for &ship in Ship::ALL {
        let span = setup.placement(ship).unwrap();
        for &other in Ship::ALL.iter().filter(|&&other| other != ship) {
            let other = setup.placement(other).unwrap();
            assert!(span.border().all(|cell| !other.contains(cell)));
        }
    }
}

#[test]
fn errors_reprompt_for_same_ship() {
    let input = "A1\n\
                 A1 B2\n\
                 A1 A4\n\
                 A5 A1\n\
                 B6 B9\n\
                 J7 J10\n\
                 C1 E1\n\
                 D2 F2\n\
                 C3 E3\n\
                 G1 G2\n";
    let (result, text) = run(input);
    let setup = result.unwrap();
    assert_eq!(setup.grid().ship_cells(), 17);
    assert_eq!(setup.grid()[shipsetup::Cell::new(10, 10)], CellState::Ship);

    let expected_errors = [
        "\nError! Invalid format\n\n",
        "\nError! Wrong ship location! Try again:\n\n",
        "\nError! Wrong length of the Aircraft Carrier! Try again:\n\n",
        "\nError! You placed it too close to another one. Try again:\n\n",
        "\nError! You placed it too close to another one. Try again:\n\n",
    ];
    let mut from = 0;
    for message in expected_errors.iter() {
        let at = text[from..]
            .find(message)
            .unwrap_or_else(|| panic!("missing {:?}", message));
        from += at + message.len();
    }
    assert_eq!(text.matches("Error!").count(), expected_errors.len());
}

#[test]
fn input_ending_early_is_an_error() {
    let (result, text) = run("A1 A5\nnot coordinates\n");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::UnexpectedEof);
    assert!(text.contains(&prompt(Ship::Battleship)));
    assert!(text.contains("Error! Invalid format"));
}
