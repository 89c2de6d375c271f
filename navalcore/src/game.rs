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

//! Implementation of the game as a whole: both fleet boards, the sources of each side's
//! moves, and the turn loop that alternates between them.
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::{
    board::Board,
    display::BoardView,
    errors::{NavalError, Side},
    lines::LineReader,
    placement::{self, PlacementBounds},
    rules::Rules,
    shot::{self, GuessError, ShotOutcome},
};

/// Options that change how a game is set up.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GameOptions {
    /// How ship extents are checked during placement.
    pub placement_bounds: PlacementBounds,
}

/// Somewhere a side's moves come from.
pub trait MoveSource {
    /// The side making these moves.
    fn side(&self) -> Side;

    /// Prompt for and read the next move. Returns `None` when the side gives up.
    fn next_move(&mut self, out: &mut dyn Write) -> Result<Option<String>, NavalError>;
}

/// Moves typed by the human player.
#[derive(Debug)]
pub struct HumanMoves<B> {
    lines: LineReader<B>,
}

impl<B> HumanMoves<B> {
    /// Read moves from the given source, usually locked stdin.
    pub fn new(read: B) -> Self {
        Self {
            lines: LineReader::new(read),
        }
    }
}

impl<B: BufRead> MoveSource for HumanMoves<B> {
    fn side(&self) -> Side {
        Side::Player
    }

    fn next_move(&mut self, out: &mut dyn Write) -> Result<Option<String>, NavalError> {
        write!(out, "(Your move)>").map_err(NavalError::Output)?;
        out.flush().map_err(NavalError::Output)?;
        match self.lines.read_line_lossy() {
            Ok(line) if line.is_empty() => Ok(None),
            Ok(line) => Ok(Some(line)),
            Err(err) => {
                warn!("could not read player move: {}", err);
                Ok(None)
            }
        }
    }
}

/// Moves read one per line from the turns file.
#[derive(Debug)]
pub struct ScriptedMoves<B> {
    lines: LineReader<B>,
}

impl<B> ScriptedMoves<B> {
    /// Read moves from the given turns file.
    pub fn new(read: B) -> Self {
        Self {
            lines: LineReader::new(read),
        }
    }
}

impl<B: BufRead> MoveSource for ScriptedMoves<B> {
    fn side(&self) -> Side {
        Side::Cpu
    }

    fn next_move(&mut self, out: &mut dyn Write) -> Result<Option<String>, NavalError> {
        write!(out, "(CPU move)>").map_err(NavalError::Output)?;
        let line = self.lines.read_line_lossy().map_err(NavalError::Turns)?;
        if line.is_empty() {
            return Ok(None);
        }
        writeln!(out, "{}", line).map_err(NavalError::Output)?;
        Ok(Some(line))
    }
}

/// Handles gameplay. Owns both fleet boards.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    player: Board,
    cpu: Board,
}

impl Game {
    /// Create empty boards from the rules and place both fleets, player first.
    pub fn setup<P: BufRead, C: BufRead>(
        rules: Rules,
        player_map: &mut LineReader<P>,
        cpu_map: &mut LineReader<C>,
        options: GameOptions,
    ) -> Result<Self, NavalError> {
        let mut player = rules.new_board();
        let mut cpu = rules.new_board();
        let lengths = rules.ship_lengths();
        let bounds = options.placement_bounds;
        placement::place_fleet(&mut player, Side::Player, lengths, player_map, bounds)?;
        placement::place_fleet(&mut cpu, Side::Cpu, lengths, cpu_map, bounds)?;
        debug!("both fleets placed with {:?} bounds", bounds);
        Ok(Self { rules, player, cpu })
    }

    /// Get the rules this game was set up with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get the fleet board belonging to the given side.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player,
            Side::Cpu => &mut self.cpu,
        }
    }

    /// Fire a guess from `attacker` at the opponent's board.
    pub fn fire(&mut self, attacker: Side, guess: &str) -> Result<ShotOutcome, GuessError> {
        shot::fire(self.board_mut(attacker.opponent()), guess)
    }

    /// Get the winner, if any. The player is checked first.
    pub fn winner(&self) -> Option<Side> {
        if self.cpu.is_defeated() {
            Some(Side::Player)
        } else if self.player.is_defeated() {
            Some(Side::Cpu)
        } else {
            None
        }
    }

    /// Write the opponent's board with ships hidden, then the player's own board.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), NavalError> {
        write!(
            out,
            "{}===\n{}",
            BoardView::hidden(&self.cpu),
            BoardView::revealed(&self.player)
        )
        .map_err(NavalError::Output)
    }

    /// Read moves from `source` until one is accepted, reporting each result. Refused
    /// guesses are reported and do not count as a turn.
    pub fn take_turn<M, W>(
        &mut self,
        source: &mut M,
        out: &mut W,
    ) -> Result<ShotOutcome, NavalError>
    where
        M: MoveSource + ?Sized,
        W: Write,
    {
        let side = source.side();
        loop {
            let guess = source.next_move(out)?.ok_or(NavalError::GaveUp(side))?;
            match self.fire(side, &guess) {
                Ok(outcome) => {
                    debug!("{} fired {:?}: {:?}", side, guess.trim(), outcome);
                    for msg in outcome.messages() {
                        writeln!(out, "{}", msg).map_err(NavalError::Output)?;
                    }
                    return Ok(outcome);
                }
                Err(err) => {
                    debug!("{} guess {:?} refused: {}", side, guess, err);
                    writeln!(out, "{}", err).map_err(NavalError::Output)?;
                }
            }
        }
    }

    /// Report the winner, if there is one.
    fn report_winner<W: Write>(&self, out: &mut W) -> Result<Option<Side>, NavalError> {
        let winner = self.winner();
        if let Some(side) = winner {
            info!("{} wins", side);
            let msg = match side {
                Side::Player => "Game over - you win",
                Side::Cpu => "Game over - you lose",
            };
            writeln!(out, "{}", msg).map_err(NavalError::Output)?;
        }
        Ok(winner)
    }

    /// Play until one side wins, returning the winner. Each round renders the boards,
    /// takes one move from `human` and then one from `cpu`, checking for a winner after
    /// every move.
    pub fn run<H, C, W>(
        &mut self,
        human: &mut H,
        cpu: &mut C,
        out: &mut W,
    ) -> Result<Side, NavalError>
    where
        H: MoveSource + ?Sized,
        C: MoveSource + ?Sized,
        W: Write,
    {
        debug_assert_eq!(human.side(), Side::Player);
        debug_assert_eq!(cpu.side(), Side::Cpu);
        loop {
            if let Some(winner) = self.report_winner(out)? {
                return Ok(winner);
            }
            self.render(out)?;
            self.take_turn(human, out)?;
            if let Some(winner) = self.report_winner(out)? {
                return Ok(winner);
            }
            self.take_turn(cpu, out)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Coordinate, ShipId};

    fn game(rules: &str, player: &str, cpu: &str) -> Game {
        let rules = Rules::read(&mut LineReader::new(rules.as_bytes())).unwrap();
        Game::setup(
            rules,
            &mut LineReader::new(player.as_bytes()),
            &mut LineReader::new(cpu.as_bytes()),
            GameOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn moves_target_the_opponent() {
        let mut game = game("3 3\n1\n1\n", "A1 E\n", "B2 S\n");
        assert_eq!(game.fire(Side::Player, "A1"), Ok(ShotOutcome::Miss));
        assert_eq!(game.board(Side::Cpu)[Coordinate::new(1, 1)], Cell::Miss);
        assert_eq!(game.board(Side::Player)[Coordinate::new(1, 1)], Cell::Ship(ShipId(1)));
        assert_eq!(game.winner(), None);
        assert_eq!(game.fire(Side::Cpu, "A1"), Ok(ShotOutcome::Sunk(ShipId(1))));
        assert_eq!(game.winner(), Some(Side::Cpu));
    }

    #[test]
    fn player_win_is_checked_first() {
        let mut game = game("3 3\n1\n1\n", "A1 E\n", "B2 S\n");
        game.fire(Side::Player, "B2").unwrap();
        game.fire(Side::Cpu, "A1").unwrap();
        assert_eq!(game.winner(), Some(Side::Player));
    }

    #[test]
    fn no_ships_means_immediate_win() {
        let mut game = game("2 2\n0\n", "", "");
        let mut human = HumanMoves::new(&b""[..]);
        let mut cpu = ScriptedMoves::new(&b""[..]);
        let mut out = Vec::new();
        assert_eq!(game.run(&mut human, &mut cpu, &mut out).unwrap(), Side::Player);
        assert_eq!(String::from_utf8(out).unwrap(), "Game over - you win\n");
    }

    #[test]
    fn render_hides_opponent_ships() {
        let game = game("2 1\n1\n1\n", "B1 N\n", "A1 N\n");
        let mut out = Vec::new();
        game.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "   AB\n 1 ..\n===\n   AB\n 1 .1\n"
        );
    }
}
