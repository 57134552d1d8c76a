//! Guess sources
//!
//! The round controller pulls one line per turn from a [`GuessSource`]. It
//! never touches stdin itself, so a game can be driven by a terminal, a pipe
//! or a fixed script.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Supplier of raw guess lines
pub trait GuessSource {
    /// Next line with its terminator stripped
    ///
    /// Returns `None` once the input ends without any pending data.
    fn next_line(&mut self) -> Option<String>;
}

/// Reads lines from any buffered reader (stdin in the binary)
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource { reader }
    }
}

impl LineSource<io::StdinLock<'static>> {
    /// Read guesses from the process's standard input
    pub fn stdin() -> Self {
        LineSource::new(io::stdin().lock())
    }
}

impl<R: BufRead> GuessSource for LineSource<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            // A final line without terminator still counts as a guess
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                // Undecodable bytes become U+FFFD and fail validation
                Some(String::from_utf8_lossy(&buf).into_owned())
            }
            Err(e) => {
                eprintln!("Error reading input: {e}");
                None
            }
        }
    }
}

/// Replays a predetermined sequence of lines, then reports end of input
///
/// Serializable so a recorded game can be stored next to its seed and
/// replayed later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    /// Create a source from a list of lines
    ///
    /// # Example
    /// ```
    /// use my_mastermind::game::{GuessSource, ScriptedSource};
    ///
    /// let mut source = ScriptedSource::new(["9999", "0123"]);
    /// assert_eq!(source.next_line().as_deref(), Some("9999"));
    /// assert_eq!(source.next_line().as_deref(), Some("0123"));
    /// assert_eq!(source.next_line(), None);
    /// ```
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma or whitespace separated script (e.g. `"1023,4567"`)
    pub fn parse(script: &str) -> Self {
        ScriptedSource::new(
            script
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty()),
        )
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl GuessSource for ScriptedSource {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}
