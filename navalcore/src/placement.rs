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

//! Implements the setup phase: writing a fleet into a board from a map file.
//!
//! Each non-blank line of a map file is a directive `<coordinate> <direction>`, for
//! example `B2 S`. The n-th directive places ship `n`, which covers as many cells as the
//! n-th length in the rules, starting on the coordinate and heading in the direction.
use std::{convert::TryFrom, io::BufRead};

use log::{debug, trace};

use crate::{
    board::{Board, Cell, Coordinate, ShipId},
    errors::Side,
    lines::LineReader,
};

pub use self::errors::{CannotPlaceReason, PlacementError};

mod errors;

/// Heading of a ship from its anchor cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    /// Towards row 1.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column A.
    West,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Get the coordinate one cell along this direction. Returns `None` if that would go
    /// below zero on either axis.
    pub fn step(self, coord: Coordinate) -> Option<Coordinate> {
        let Coordinate { x, y } = coord;
        Some(match self {
            Direction::North => Coordinate::new(x, y.checked_sub(1)?),
            Direction::East => Coordinate::new(x + 1, y),
            Direction::South => Coordinate::new(x, y + 1),
            Direction::West => Coordinate::new(x.checked_sub(1)?, y),
        })
    }
}

impl TryFrom<char> for Direction {
    type Error = CannotPlaceReason;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            _ => Err(CannotPlaceReason::Malformed),
        }
    }
}

/// How the extent of a ship is checked against the board while it is being written.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementBounds {
    /// Write each cell, then step, and fail only once the next position is outside the
    /// board plus a one-cell margin. Cells may be written into the margin before the
    /// failure is noticed.
    ///
    /// Because the check also runs after the final cell, a ship with any cell in the
    /// margin always fails, so this accepts exactly the placements [`Strict`] accepts.
    ///
    /// [`Strict`]: PlacementBounds::Strict
    Legacy,
    /// Every cell of the ship must be on the visible board before it is written.
    Strict,
}

impl PlacementBounds {
    /// Check if a cell may be written under these bounds.
    fn allows(self, board: &Board, coord: Coordinate) -> bool {
        match self {
            PlacementBounds::Legacy => board.in_margin_window(coord),
            PlacementBounds::Strict => board.contains(coord),
        }
    }
}

impl Default for PlacementBounds {
    fn default() -> Self {
        PlacementBounds::Legacy
    }
}

/// A single parsed line of a map file.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Directive {
    /// Cell where the ship starts.
    pub anchor: Coordinate,
    /// Heading of the rest of the ship, or `None` if the heading was a single character
    /// other than `N`, `E`, `S` or `W`. An unknown heading is only rejected once the
    /// first cell of the ship has been checked and written.
    pub direction: Option<Direction>,
}

impl Directive {
    /// Parse a directive and check its anchor against the board.
    pub fn parse(line: &str, board: &Board) -> Result<Self, CannotPlaceReason> {
        let mut tokens = line.split_whitespace();
        let (anchor, direction) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(anchor), Some(direction), None) => (anchor, direction),
            _ => return Err(CannotPlaceReason::Malformed),
        };

        let anchor: Coordinate = anchor.parse().map_err(|_| CannotPlaceReason::Malformed)?;
        if !board.contains(anchor) {
            return Err(CannotPlaceReason::OutOfBounds);
        }

        let mut chars = direction.chars();
        let direction = match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::try_from(c).ok(),
            _ => return Err(CannotPlaceReason::Malformed),
        };
        Ok(Directive { anchor, direction })
    }
}

/// Write a single ship of the given length into the board. A ship of length 0 writes
/// nothing and never fails.
pub fn place_ship(
    board: &mut Board,
    id: ShipId,
    len: usize,
    directive: Directive,
    bounds: PlacementBounds,
) -> Result<(), CannotPlaceReason> {
    let mut next = Some(directive.anchor);
    for _ in 0..len {
        let coord = next
            .filter(|&coord| bounds.allows(board, coord))
            .ok_or(CannotPlaceReason::OutOfBounds)?;
        if board[coord].ship().is_some() {
            return Err(CannotPlaceReason::AlreadyOccupied);
        }
        board[coord] = Cell::Ship(id);
        trace!("ship {} covers {}", id, coord);

        let direction = directive.direction.ok_or(CannotPlaceReason::Malformed)?;
        next = direction.step(coord);
        if bounds == PlacementBounds::Legacy && !next.map_or(false, |c| bounds.allows(board, c)) {
            return Err(CannotPlaceReason::OutOfBounds);
        }
    }
    Ok(())
}

/// Read every directive of a map file and place the fleet described by `ship_lengths`
/// into `board`. Reading stops at the first blank line or at end of input, and exactly
/// one directive per ship must have been read by then.
pub fn place_fleet<B: BufRead>(
    board: &mut Board,
    side: Side,
    ship_lengths: &[usize],
    lines: &mut LineReader<B>,
    bounds: PlacementBounds,
) -> Result<(), PlacementError> {
    let fail = |reason| PlacementError::new(side, reason);
    let mut placed = 0;
    loop {
        let line = lines
            .read_line()
            .map_err(|err| PlacementError::io(side, err))?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let directive = Directive::parse(line, board).map_err(|reason| {
            debug!("{} map: rejected directive {:?}: {}", side, line, reason);
            fail(reason)
        })?;
        let len = match ship_lengths.get(placed) {
            Some(&len) => len,
            None => {
                debug!("{} map: more directives than {} ships", side, ship_lengths.len());
                return Err(fail(CannotPlaceReason::Malformed));
            }
        };
        placed += 1;

        let id = ShipId(placed);
        debug!(
            "{} map: ship {} length {} at {} heading {:?}",
            side, id, len, directive.anchor, directive.direction
        );
        place_ship(board, id, len, directive, bounds).map_err(|reason| {
            debug!("{} map: ship {} rejected: {}", side, id, reason);
            fail(reason)
        })?;
    }

    if placed != ship_lengths.len() {
        debug!(
            "{} map: placed {} of {} ships",
            side,
            placed,
            ship_lengths.len()
        );
        return Err(fail(CannotPlaceReason::Malformed));
    }
    Ok(())
}
