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

//! Validation and resolution of a single guess against a fleet board.
use log::trace;
use thiserror::Error;

use crate::board::{Board, Cell, Coordinate, ShipId};

/// Reason a guess was refused. Both are recoverable: the same side guesses again.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GuessError {
    /// The guess was not a coordinate, or was off the board.
    #[error("Bad guess")]
    BadGuess,
    /// The targeted cell had already been shot.
    #[error("Repeated guess")]
    RepeatedGuess,
}

/// Outcome of a guess that landed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// Nothing was hit.
    Miss,
    /// The given ship was hit but still has un-hit cells.
    Hit(ShipId),
    /// The given ship was hit and this was its last un-hit cell.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// Lines reported for this outcome, in order.
    pub fn messages(self) -> &'static [&'static str] {
        match self {
            ShotOutcome::Miss => &["Miss"],
            ShotOutcome::Hit(_) => &["Hit"],
            ShotOutcome::Sunk(_) => &["Hit", "Ship sunk"],
        }
    }
}

/// Check the syntax and bounds of a guess. Surrounding whitespace is ignored.
pub fn parse_guess(text: &str, board: &Board) -> Result<Coordinate, GuessError> {
    text.trim()
        .parse()
        .ok()
        .filter(|&coord| board.contains(coord))
        .ok_or(GuessError::BadGuess)
}

/// Validate a guess and, if it is accepted, record it on the board.
///
/// A refused guess leaves the board untouched.
pub fn fire(board: &mut Board, text: &str) -> Result<ShotOutcome, GuessError> {
    let coord = parse_guess(text, board)?;
    let cell = board[coord];
    let outcome = match cell {
        Cell::Hit | Cell::Miss => return Err(GuessError::RepeatedGuess),
        Cell::Empty => {
            board[coord] = Cell::Miss;
            ShotOutcome::Miss
        }
        Cell::Ship(id) => {
            board[coord] = Cell::Hit;
            if board.ship_cells(id) == 0 {
                ShotOutcome::Sunk(id)
            } else {
                ShotOutcome::Hit(id)
            }
        }
    };
    trace!("shot at {}: {:?}", coord, outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_ship() -> Board {
        let mut board = Board::new(3, 3);
        for y in 1..=3 {
            board.set(Coordinate::new(2, y), Cell::Ship(ShipId(1)));
        }
        board
    }

    #[test]
    fn bounds_are_inclusive() {
        let board = Board::new(3, 3);
        assert_eq!(parse_guess("C3", &board), Ok(Coordinate::new(3, 3)));
        assert_eq!(parse_guess(" A1\t", &board), Ok(Coordinate::new(1, 1)));
        assert_eq!(parse_guess("C4", &board), Err(GuessError::BadGuess));
        assert_eq!(parse_guess("D1", &board), Err(GuessError::BadGuess));
        assert_eq!(parse_guess("A0", &board), Err(GuessError::BadGuess));
        assert_eq!(parse_guess("c1", &board), Err(GuessError::BadGuess));
    }

    #[test]
    fn miss_then_repeat() {
        let mut board = board_with_ship();
        assert_eq!(fire(&mut board, "A1"), Ok(ShotOutcome::Miss));
        assert_eq!(board[Coordinate::new(1, 1)], Cell::Miss);
        let before = board.clone();
        assert_eq!(fire(&mut board, "A1"), Err(GuessError::RepeatedGuess));
        assert_eq!(board, before);
    }

    #[test]
    fn sunk_only_on_last_cell() {
        let mut board = board_with_ship();
        assert_eq!(fire(&mut board, "B1"), Ok(ShotOutcome::Hit(ShipId(1))));
        assert_eq!(fire(&mut board, "B3"), Ok(ShotOutcome::Hit(ShipId(1))));
        assert!(!board.is_defeated());
        assert_eq!(fire(&mut board, "B2"), Ok(ShotOutcome::Sunk(ShipId(1))));
        assert!(board.is_defeated());
        assert_eq!(fire(&mut board, "B2"), Err(GuessError::RepeatedGuess));
    }

    #[test]
    fn bad_guess_does_not_mutate() {
        let mut board = board_with_ship();
        let before = board.clone();
        for _ in 0..3 {
            assert_eq!(fire(&mut board, "B"), Err(GuessError::BadGuess));
            assert_eq!(fire(&mut board, "B9"), Err(GuessError::BadGuess));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn messages() {
        assert_eq!(ShotOutcome::Miss.messages(), &["Miss"]);
        assert_eq!(ShotOutcome::Sunk(ShipId(2)).messages(), &["Hit", "Ship sunk"]);
        assert_eq!(GuessError::RepeatedGuess.to_string(), "Repeated guess");
    }
}
