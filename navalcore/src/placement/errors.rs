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

//! Errors used while placing a fleet.

use std::{fmt, io};

use thiserror::Error;

use crate::errors::Side;

/// Reason a map file could not be applied to a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The map file was unreadable, a directive was malformed, or the number of
    /// directives did not match the number of ships.
    #[error("malformed map")]
    Malformed,
    /// A ship would have left the board.
    #[error("ship out of bounds")]
    OutOfBounds,
    /// A ship would have covered a cell already held by another ship.
    #[error("ships overlap")]
    AlreadyOccupied,
}

/// Error caused when one side's map file cannot be applied to its board.
#[derive(Error)]
pub struct PlacementError {
    /// Whose map file failed.
    side: Side,
    /// Why it failed.
    reason: CannotPlaceReason,
    /// Underlying read failure, if the file could not be read.
    #[source]
    source: Option<io::Error>,
}

impl PlacementError {
    /// Construct a placement error for the given side.
    pub(crate) fn new(side: Side, reason: CannotPlaceReason) -> Self {
        Self {
            side,
            reason,
            source: None,
        }
    }

    /// Construct a placement error for a map file that could not be read.
    pub(super) fn io(side: Side, err: io::Error) -> Self {
        Self {
            side,
            reason: CannotPlaceReason::Malformed,
            source: Some(err),
        }
    }

    /// Get the side whose map failed.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match (self.reason, self.side) {
            (CannotPlaceReason::AlreadyOccupied, Side::Player) => 60,
            (CannotPlaceReason::AlreadyOccupied, Side::Cpu) => 70,
            (CannotPlaceReason::OutOfBounds, Side::Player) => 80,
            (CannotPlaceReason::OutOfBounds, Side::Cpu) => 90,
            (CannotPlaceReason::Malformed, Side::Player) => 100,
            (CannotPlaceReason::Malformed, Side::Cpu) => 110,
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.reason {
            CannotPlaceReason::Malformed => write!(f, "Error in {} map file", self.side),
            CannotPlaceReason::OutOfBounds => {
                write!(f, "Out of bounds in {} map file", self.side)
            }
            CannotPlaceReason::AlreadyOccupied => write!(f, "Overlap in {} map file", self.side),
        }
    }
}

impl fmt::Debug for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self, self.reason)?;
        if let Some(err) = &self.source {
            write!(f, ": {}", err)?;
        }
        Ok(())
    }
}
