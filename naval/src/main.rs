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
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
    process,
};

use clap::{App, Arg, ArgMatches, ErrorKind};
use log::{debug, info};

use navalcore::{
    game::{HumanMoves, ScriptedMoves},
    lines::LineReader,
    FileRole, Game, GameOptions, NavalError, PlacementBounds, Rules, Side,
};

mod logging;

/// Positional file arguments, in command line order.
const FILE_ARGS: &[(&str, FileRole, &str)] = &[
    ("rules", FileRole::Rules, "board size, ship count and ship lengths"),
    ("playermap", FileRole::PlayerMap, "placement of the player's ships"),
    ("cpumap", FileRole::CpuMap, "placement of the CPU's ships"),
    ("turns", FileRole::Turns, "the CPU's moves, one per line"),
];

fn main() {
    logging::init_logging();

    let mut app = App::new("naval")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Naval combat against a scripted opponent.")
        .arg(
            Arg::with_name("strict_placement")
                .long("strict-placement")
                .help("check every ship cell against the board instead of the legacy margin"),
        );
    for (i, &(name, _, help)) in FILE_ARGS.iter().enumerate() {
        app = app.arg(Arg::with_name(name).index(i as u64 + 1).help(help));
    }
    // Anything after the four files is ignored.
    let app = app.arg(
        Arg::with_name("rest")
            .index(FILE_ARGS.len() as u64 + 1)
            .multiple(true)
            .hidden(true),
    );

    let result = match app.get_matches_safe() {
        Ok(matches) => run(&matches),
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
            _ => {
                debug!("argument error: {}", err.message);
                Err(NavalError::Usage)
            }
        },
    };

    match result {
        Ok(winner) => debug!("game finished, {} won", winner),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    }
}

/// Open every input file, set up both fleets and play the game to the end.
fn run(matches: &ArgMatches) -> Result<Side, NavalError> {
    if FILE_ARGS.iter().any(|&(name, _, _)| !matches.is_present(name)) {
        return Err(NavalError::Usage);
    }
    let rules = open(matches, FILE_ARGS[0])?;
    let player_map = open(matches, FILE_ARGS[1])?;
    let cpu_map = open(matches, FILE_ARGS[2])?;
    let turns = open(matches, FILE_ARGS[3])?;

    let options = GameOptions {
        placement_bounds: if matches.is_present("strict_placement") {
            PlacementBounds::Strict
        } else {
            PlacementBounds::Legacy
        },
    };

    let rules = Rules::read(&mut LineReader::new(rules))?;
    let mut game = Game::setup(
        rules,
        &mut LineReader::new(player_map),
        &mut LineReader::new(cpu_map),
        options,
    )?;
    info!(
        "starting {}x{} game with {} ships per side",
        game.rules().width(),
        game.rules().height(),
        game.rules().ship_lengths().len()
    );

    let stdin = io::stdin();
    let mut human = HumanMoves::new(stdin.lock());
    let mut cpu = ScriptedMoves::new(turns);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    game.run(&mut human, &mut cpu, &mut out)
}

/// Open the input file given for one of the [`FILE_ARGS`].
fn open(
    matches: &ArgMatches,
    (name, role, _): (&str, FileRole, &str),
) -> Result<BufReader<File>, NavalError> {
    let path = Path::new(matches.value_of_os(name).ok_or(NavalError::Usage)?);
    File::open(path).map(BufReader::new).map_err(|err| {
        debug!("could not open {} file {}: {}", role, path.display(), err);
        NavalError::MissingFile(role, err)
    })
}
