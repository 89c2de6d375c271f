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

//! Types that make up a fleet board.
//!
//! A [`Board`] is plain storage. It does not enforce any of the game's rules; the
//! placement and shot modules decide which transitions are legal and the board only
//! records them.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

pub use self::coordinate::{Coordinate, ParseCoordinateError};

mod coordinate;

/// Largest width or height a board may have. Columns are named by a single letter.
pub const MAX_SIZE: usize = 26;

/// Identifies a ship within one fleet. Ships are numbered from 1 in placement order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub usize);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// State of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Open water that has not been shot.
    Empty,
    /// Open water that has been shot.
    Miss,
    /// A ship cell that has been shot. The id of the ship is no longer tracked.
    Hit,
    /// A ship cell that has not been shot yet.
    Ship(ShipId),
}

impl Cell {
    /// Whether a shot has already landed on this cell.
    pub fn is_shot(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    /// Get the ship occupying this cell, if it has not been hit.
    pub fn ship(self) -> Option<ShipId> {
        match self {
            Cell::Ship(id) => Some(id),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// A single side's fleet board.
///
/// Cells are stored with a one-cell margin on every edge, so coordinates from `0` to
/// `width + 1` (and `0` to `height + 1`) are addressable. Only `1..=width` by
/// `1..=height` is the visible board; the margin is never rendered and is ignored by
/// [`ship_cells`][Board::ship_cells] and [`remaining_ship_cells`][Board::remaining_ship_cells].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Visible width of the board.
    width: usize,
    /// Visible height of the board.
    height: usize,
    /// Cells, row-major, including the margin.
    cells: Box<[Cell]>,
}

impl Board {
    /// Create a board with all cells [`Empty`][Cell::Empty]. Dimensions are not checked
    /// here; use [`Rules`][crate::rules::Rules] to validate them first.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = vec![Cell::Empty; (width + 2) * (height + 2)].into_boxed_slice();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Get the visible width of the board.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the visible height of the board.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if the coordinate is on the visible board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        (1..=self.width).contains(&coord.x) && (1..=self.height).contains(&coord.y)
    }

    /// Check if the coordinate is on the visible board or its margin.
    pub fn in_margin_window(&self, coord: Coordinate) -> bool {
        coord.x <= self.width + 1 && coord.y <= self.height + 1
    }

    /// Convert a coordinate to an index in `cells`, if it is within the margin window.
    fn linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.in_margin_window(coord) {
            Some(coord.y * (self.width + 2) + coord.x)
        } else {
            None
        }
    }

    /// Get the cell at the given coordinate. Returns `None` outside the margin window.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.linearize(coord).map(|i| self.cells[i])
    }

    /// Overwrite the cell at the given coordinate. Panics outside the margin window.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        self[coord] = cell;
    }

    /// Get an iterator over the visible rows of the board. Each row is an iterator over
    /// its cells from left to right.
    pub fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Cell>> {
        (1..=self.height)
            .map(move |y| (1..=self.width).map(move |x| self[Coordinate::new(x, y)]))
    }

    /// Iterate every visible cell.
    fn visible(&self) -> impl '_ + Iterator<Item = Cell> {
        self.rows().flatten()
    }

    /// Count the visible cells still held by the given ship.
    pub fn ship_cells(&self, id: ShipId) -> usize {
        self.visible().filter(|cell| cell.ship() == Some(id)).count()
    }

    /// Count the visible ship cells that have not been hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.visible().filter(|cell| cell.ship().is_some()).count()
    }

    /// Returns true when no visible ship cell remains un-hit.
    pub fn is_defeated(&self) -> bool {
        self.remaining_ship_cells() == 0
    }
}

impl Index<Coordinate> for Board {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        let i = self.linearize(coord).expect("coordinate out of bounds");
        &self.cells[i]
    }
}

impl IndexMut<Coordinate> for Board {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        let i = self.linearize(coord).expect("coordinate out of bounds");
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(3, 2);
        assert_eq!(board.rows().count(), 2);
        assert!(board.rows().all(|row| row.filter(|&c| c == Cell::Empty).count() == 3));
        assert!(board.is_defeated());
    }

    #[test]
    fn bounds_and_margin() {
        let board = Board::new(3, 3);
        assert!(board.contains(Coordinate::new(3, 3)));
        assert!(!board.contains(Coordinate::new(3, 4)));
        assert!(!board.contains(Coordinate::new(0, 1)));
        assert!(board.in_margin_window(Coordinate::new(4, 0)));
        assert!(!board.in_margin_window(Coordinate::new(5, 1)));
        assert_eq!(board.get(Coordinate::new(4, 4)), Some(Cell::Empty));
        assert_eq!(board.get(Coordinate::new(1, 5)), None);
    }

    #[test]
    fn margin_cells_are_not_counted() {
        let mut board = Board::new(2, 2);
        board.set(Coordinate::new(0, 1), Cell::Ship(ShipId(1)));
        board.set(Coordinate::new(1, 1), Cell::Ship(ShipId(1)));
        assert_eq!(board.ship_cells(ShipId(1)), 1);
        assert_eq!(board.remaining_ship_cells(), 1);

        board.set(Coordinate::new(1, 1), Cell::Hit);
        assert!(board.is_defeated());
    }

    #[test]
    #[should_panic(expected = "coordinate out of bounds")]
    fn set_outside_window_panics() {
        let mut board = Board::new(2, 2);
        board.set(Coordinate::new(4, 1), Cell::Miss);
    }
}
