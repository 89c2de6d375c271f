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

//! Engine for a two-sided game of naval combat where one side is played from standard
//! input and the other side is scripted from a file.
//!
//! The pieces are layered from the bottom up:
//!
//! [`board`] holds the per-cell state of a single fleet.
//!
//! [`lines`] reads the comment-aware line format shared by every input file.
//!
//! [`rules`] parses the rules file into board dimensions and ship lengths.
//!
//! [`placement`] writes a fleet into a board from a map file.
//!
//! [`shot`] validates and resolves a single guess against a board.
//!
//! [`game`] owns both boards and runs the alternating turn loop.

pub mod board;
pub mod display;
pub mod errors;
pub mod game;
pub mod lines;
pub mod placement;
pub mod rules;
pub mod shot;

pub use self::{
    board::{Board, Cell, Coordinate, ShipId},
    errors::{FileRole, NavalError, Side},
    game::{Game, GameOptions},
    placement::PlacementBounds,
    rules::Rules,
};
