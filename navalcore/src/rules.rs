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

//! The rules file: board dimensions and the lengths of the ships in each fleet.
use std::io::{self, BufRead};

use log::debug;
use thiserror::Error;

use crate::{
    board::{Board, MAX_SIZE},
    lines::LineReader,
};

/// Largest number of ships a fleet may have.
pub const MAX_SHIPS: usize = 15;

/// Reason the rules file was rejected.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The file could not be read.
    #[error("could not read rules: {0}")]
    Io(#[from] io::Error),

    /// A required line was missing or blank.
    #[error("missing {0}")]
    Missing(&'static str),

    /// A value was not an integer.
    #[error("{what} is not an integer: {text:?}")]
    NotANumber { what: &'static str, text: String },

    /// The board would be narrower or shorter than one cell, or wider or taller than
    /// [`MAX_SIZE`].
    #[error("board dimensions {width}x{height} out of range 1..={}", MAX_SIZE)]
    Dimensions { width: i64, height: i64 },

    /// More ships than [`MAX_SHIPS`], or a negative count.
    #[error("ship count {0} out of range 0..={}", MAX_SHIPS)]
    ShipCount(i64),
}

/// Validated contents of a rules file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rules {
    width: usize,
    height: usize,
    ship_lengths: Vec<usize>,
}

impl Rules {
    /// Construct rules from already-known values, applying the same range checks as
    /// [`Rules::read`]. A ship length below 1 is accepted and gives a ship with no cells.
    pub fn new(width: i64, height: i64, ship_lengths: &[i64]) -> Result<Self, RulesError> {
        let size = 1..=MAX_SIZE as i64;
        if !size.contains(&width) || !size.contains(&height) {
            return Err(RulesError::Dimensions { width, height });
        }
        if ship_lengths.len() > MAX_SHIPS {
            return Err(RulesError::ShipCount(ship_lengths.len() as i64));
        }
        let ship_lengths = ship_lengths.iter().map(|&len| len.max(0) as usize).collect();
        Ok(Self {
            width: width as usize,
            height: height as usize,
            ship_lengths,
        })
    }

    /// Read rules from a file: `width height` on the first line, the ship count on the
    /// second, then one ship length per line.
    pub fn read<B: BufRead>(lines: &mut LineReader<B>) -> Result<Self, RulesError> {
        let line = lines.read_line()?;
        let mut dims = line.split_whitespace();
        let width = parse_int(dims.next(), "width")?;
        let height = parse_int(dims.next(), "height")?;

        let count = parse_int(lines.read_line()?.split_whitespace().next(), "ship count")?;
        if !(0..=MAX_SHIPS as i64).contains(&count) {
            return Err(RulesError::ShipCount(count));
        }

        let mut lengths = Vec::with_capacity(count as usize);
        for _ in 0..count {
            lengths.push(parse_int(
                lines.read_line()?.split_whitespace().next(),
                "ship length",
            )?);
        }

        let rules = Self::new(width, height, &lengths)?;
        debug!(
            "rules: {}x{} board, ship lengths {:?}",
            rules.width, rules.height, rules.ship_lengths
        );
        Ok(rules)
    }

    /// Get the width of the boards.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the boards.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the length of each ship. Ship `n` has length `ship_lengths()[n - 1]`.
    pub fn ship_lengths(&self) -> &[usize] {
        &self.ship_lengths
    }

    /// Create an empty board with these dimensions.
    pub fn new_board(&self) -> Board {
        Board::new(self.width, self.height)
    }
}

/// Parse a token as a decimal integer, accepting a leading sign.
fn parse_int(token: Option<&str>, what: &'static str) -> Result<i64, RulesError> {
    let text = token.ok_or(RulesError::Missing(what))?;
    text.parse().map_err(|_| RulesError::NotANumber {
        what,
        text: text.to_owned(),
    })
}
