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

//! Errors that end the game. Every variant maps to exactly one process exit code, and
//! the `Display` output of each variant is the single line reported on stderr.

use std::{fmt, io};

use thiserror::Error;

use crate::{placement::PlacementError, rules::RulesError};

/// One of the two sides of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The human at the terminal.
    Player,
    /// The scripted opponent whose moves come from the turns file.
    Cpu,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Player => "player",
            Side::Cpu => "CPU",
        })
    }
}

/// The role a file plays in defining a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FileRole {
    Rules,
    PlayerMap,
    CpuMap,
    Turns,
}

impl FileRole {
    /// Every role, in the order the files are given on the command line.
    pub const ALL: &'static [FileRole] = &[
        FileRole::Rules,
        FileRole::PlayerMap,
        FileRole::CpuMap,
        FileRole::Turns,
    ];
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            FileRole::Rules => "rules",
            FileRole::PlayerMap => "player map",
            FileRole::CpuMap => "CPU map",
            FileRole::Turns => "CPU turns",
        })
    }
}

/// Any condition that ends the game without a winner.
#[derive(Debug, Error)]
pub enum NavalError {
    /// Fewer than four files were given on the command line.
    #[error("Usage: naval rules playermap cpumap turns")]
    Usage,

    /// One of the input files could not be opened.
    #[error("Missing {0} file")]
    MissingFile(FileRole, #[source] io::Error),

    /// The rules file was malformed or out of range.
    #[error("Error in rules file")]
    Rules(#[from] RulesError),

    /// One side's map file could not be applied to its board.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// The turns file could not be read.
    #[error("Error in turns file")]
    Turns(#[source] io::Error),

    /// A side ran out of moves.
    #[error("{}", give_up_message(.0))]
    GaveUp(Side),

    /// Game output could not be written.
    #[error("Error writing output")]
    Output(#[source] io::Error),
}

impl NavalError {
    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NavalError::Usage => 10,
            NavalError::MissingFile(FileRole::Rules, _) => 20,
            NavalError::MissingFile(FileRole::PlayerMap, _) => 30,
            NavalError::MissingFile(FileRole::CpuMap, _) => 31,
            NavalError::MissingFile(FileRole::Turns, _) => 40,
            NavalError::Rules(_) => 50,
            NavalError::Placement(err) => err.exit_code(),
            NavalError::Turns(_) => 120,
            NavalError::GaveUp(Side::Player) => 130,
            NavalError::GaveUp(Side::Cpu) => 140,
            NavalError::Output(_) => 1,
        }
    }
}

/// Line reported when `side` gives up.
fn give_up_message(side: &Side) -> &'static str {
    match side {
        Side::Player => "Bad guess",
        Side::Cpu => "CPU player gives up",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::CannotPlaceReason;

    #[test]
    fn missing_file_codes_follow_role() {
        let codes: Vec<_> = FileRole::ALL
            .iter()
            .map(|&role| {
                NavalError::MissingFile(role, io::ErrorKind::NotFound.into()).exit_code()
            })
            .collect();
        assert_eq!(codes, vec![20, 30, 31, 40]);
    }

    #[test]
    fn messages_name_the_side() {
        let err = NavalError::from(PlacementError::new(
            Side::Cpu,
            CannotPlaceReason::AlreadyOccupied,
        ));
        assert_eq!(err.to_string(), "Overlap in CPU map file");
        assert_eq!(err.exit_code(), 70);

        let err = NavalError::MissingFile(FileRole::Turns, io::ErrorKind::NotFound.into());
        assert_eq!(err.to_string(), "Missing CPU turns file");
    }

    #[test]
    fn give_up_is_distinct_per_side() {
        assert_eq!(NavalError::GaveUp(Side::Player).to_string(), "Bad guess");
        assert_eq!(NavalError::GaveUp(Side::Player).exit_code(), 130);
        assert_eq!(
            NavalError::GaveUp(Side::Cpu).to_string(),
            "CPU player gives up"
        );
        assert_eq!(NavalError::GaveUp(Side::Cpu).exit_code(), 140);
    }
}
