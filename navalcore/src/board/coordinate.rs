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
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Matches an uppercase column letter followed by a one or two digit row.
static COORDINATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<col>[A-Z])(?P<row>[0-9]{1,2})$").unwrap());

/// The coordinates of a cell in a [`Board`][crate::board::Board]. Both axes are
/// 1-indexed; `0` and `len + 1` address the margin around the visible board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Column of the cell. `A` is column 1.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Error returned when text does not have the shape of a coordinate. This only checks
/// the syntax; a coordinate that parses may still be off the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("expected an uppercase column letter followed by a 1 or 2 digit row")]
pub struct ParseCoordinateError;

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COORDINATE.captures(s).ok_or(ParseCoordinateError)?;
        // The pattern guarantees a single ASCII uppercase letter.
        let col = captures["col"].as_bytes()[0];
        let row = captures["row"].parse().map_err(|_| ParseCoordinateError)?;
        Ok(Coordinate::new(usize::from(col - b'A') + 1, row))
    }
}

impl fmt::Display for Coordinate {
    /// Formats in-range coordinates the way they are written in map and turns files.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.x {
            1..=26 => write!(f, "{}{}", char::from(b'A' + (self.x - 1) as u8), self.y),
            _ => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_and_row() {
        assert_eq!("A1".parse(), Ok(Coordinate::new(1, 1)));
        assert_eq!("C3".parse(), Ok(Coordinate::new(3, 3)));
        assert_eq!("Z26".parse(), Ok(Coordinate::new(26, 26)));
        assert_eq!("B07".parse(), Ok(Coordinate::new(2, 7)));
        assert_eq!("D0".parse(), Ok(Coordinate::new(4, 0)));
    }

    #[test]
    fn rejects_bad_syntax() {
        for text in &["", "A", "a1", "1A", "A123", "AA1", "A-1", "A 1", "Ä1", "A1 "] {
            assert_eq!(
                text.parse::<Coordinate>(),
                Err(ParseCoordinateError),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn displays_as_written() {
        assert_eq!(Coordinate::new(2, 10).to_string(), "B10");
        assert_eq!(Coordinate::new(0, 1).to_string(), "(0, 1)");
    }
}
