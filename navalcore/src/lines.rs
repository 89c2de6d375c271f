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

//! Line reading shared by every input of the game.
//!
//! A `#` starts a comment that runs to the end of its physical line. The logical line
//! being read does not end there: reading resumes on the next physical line and appends
//! to the same logical line. A `#` inside a comment opens a nested comment, which
//! swallows one more physical line. End of input always ends the logical line.
//!
//! So a file made of whole-line comments reads the way you would expect, but a trailing
//! comment joins its line with the following one:
//!
//! ```
//! use navalcore::lines::LineReader;
//!
//! let mut lines = LineReader::new(&b"# rules\n3 3\nA1 E # anchor\nB2 S\n"[..]);
//! assert_eq!(lines.read_line().unwrap(), "3 3");
//! assert_eq!(lines.read_line().unwrap(), "A1 E B2 S");
//! assert_eq!(lines.read_line().unwrap(), "");
//! ```

use std::io::{self, BufRead};

/// Reads comment-aware lines from a buffered source.
#[derive(Debug)]
pub struct LineReader<B> {
    read: B,
    buf: Vec<u8>,
}

impl<B> LineReader<B> {
    /// Wrap a buffered source.
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: Vec::new(),
        }
    }
}

impl<B: BufRead> LineReader<B> {
    /// Read the next logical line, without its terminator. Returns an empty string at
    /// end of input, which callers cannot tell apart from a blank line.
    pub fn read_line(&mut self) -> io::Result<String> {
        self.fill_line()?;
        String::from_utf8(std::mem::take(&mut self.buf))
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Read the next logical line like [`read_line`][LineReader::read_line], replacing
    /// bytes that are not valid UTF-8 instead of failing. Used for moves, where such a
    /// line is just a bad guess.
    pub fn read_line_lossy(&mut self) -> io::Result<String> {
        self.fill_line()?;
        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }

    /// Read the bytes of the next logical line into `buf`.
    fn fill_line(&mut self) -> io::Result<()> {
        self.buf.clear();
        // Number of comments currently open. Each one closes at the next newline.
        let mut depth = 0usize;
        while let Some(byte) = self.next_byte()? {
            match byte {
                b'#' => depth += 1,
                b'\n' if depth == 0 => break,
                b'\n' => depth -= 1,
                _ if depth == 0 => self.buf.push(byte),
                _ => {}
            }
        }
        Ok(())
    }

    /// Pull a single byte from the source, or `None` at end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.read.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        };
        if byte.is_some() {
            self.read.consume(1);
        }
        Ok(byte)
    }
}
