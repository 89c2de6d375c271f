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
use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
const LOG_VAR: &str = "NAVAL_LOG";

/// Writes log records to stderr, keeping stdout for the game transcript.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger with the level named by `NAVAL_LOG`. Logging is off unless the
/// variable holds a valid level, so stderr carries only the failure line by default.
pub fn init_logging() {
    let level = env::var(LOG_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Off);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
