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

//! Character-art rendering of boards.
use std::fmt;

use crate::board::{Board, Cell};

/// How much of a board a view shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Visibility {
    /// Only shots are shown. Used for the opponent's board.
    Hidden,
    /// Un-hit ships are shown by id, misses are not. Used for your own board.
    Revealed,
}

/// Display helper that renders a board with column letters and row numbers.
///
/// ```
/// use navalcore::{board::{Board, Cell, Coordinate, ShipId}, display::BoardView};
///
/// let mut board = Board::new(3, 2);
/// board.set(Coordinate::new(1, 1), Cell::Ship(ShipId(1)));
/// board.set(Coordinate::new(2, 1), Cell::Hit);
/// board.set(Coordinate::new(3, 2), Cell::Miss);
///
/// assert_eq!(BoardView::hidden(&board).to_string(), "   ABC\n 1 .*.\n 2 ../\n");
/// assert_eq!(BoardView::revealed(&board).to_string(), "   ABC\n 1 1*.\n 2 ...\n");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct BoardView<'a> {
    board: &'a Board,
    visibility: Visibility,
}

impl<'a> BoardView<'a> {
    /// View of a board with ships hidden.
    pub fn hidden(board: &'a Board) -> Self {
        Self {
            board,
            visibility: Visibility::Hidden,
        }
    }

    /// View of a board with ships shown.
    pub fn revealed(board: &'a Board) -> Self {
        Self {
            board,
            visibility: Visibility::Revealed,
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("   ")?;
        for col in (b'A'..).take(self.board.width()) {
            write!(f, "{}", char::from(col))?;
        }
        writeln!(f)?;
        for (i, row) in self.board.rows().enumerate() {
            write!(f, "{:>2} ", i + 1)?;
            for cell in row {
                write!(f, "{}", Glyph(cell, self.visibility))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Display helper for a single cell.
struct Glyph(Cell, Visibility);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match (self.0, self.1) {
            (Cell::Hit, _) => '*',
            (Cell::Miss, Visibility::Hidden) => '/',
            (Cell::Ship(id), Visibility::Revealed) => std::char::from_digit(id.0 as u32, 36)
                .map_or('?', |c| c.to_ascii_uppercase()),
            _ => '.',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coordinate, ShipId};

    #[test]
    fn two_digit_rows_are_right_aligned() {
        let board = Board::new(1, 10);
        let text = BoardView::hidden(&board).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "   A");
        assert_eq!(lines[1], " 1 .");
        assert_eq!(lines[10], "10 .");
    }

    #[test]
    fn ship_ids_past_nine_are_letters() {
        let mut board = Board::new(3, 1);
        board.set(Coordinate::new(1, 1), Cell::Ship(ShipId(9)));
        board.set(Coordinate::new(2, 1), Cell::Ship(ShipId(10)));
        board.set(Coordinate::new(3, 1), Cell::Ship(ShipId(15)));
        assert_eq!(BoardView::revealed(&board).to_string(), "   ABC\n 1 9AF\n");
        assert_eq!(BoardView::hidden(&board).to_string(), "   ABC\n 1 ...\n");
    }

    #[test]
    fn full_width_header() {
        let board = Board::new(26, 1);
        let text = BoardView::hidden(&board).to_string();
        assert!(text.starts_with("   ABCDEFGHIJKLMNOPQRSTUVWXYZ\n"));
    }
}
