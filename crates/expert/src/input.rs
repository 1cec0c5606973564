#![forbid(unsafe_code)]

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of user lines. `Ok(None)` means the input is exhausted.
pub trait LineSource {
    /// Next line without its trailing newline.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, typically locked stdin.
#[derive(Debug)]
pub struct ConsoleReader<R> {
    inner: R,
}

impl<R: BufRead> ConsoleReader<R> {
    /// Wrap a buffered reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for ConsoleReader<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}

/// Canned lines, replayed in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    /// Reader that yields `lines` then reports end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedReader {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_reader_strips_line_endings() {
        let mut r = ConsoleReader::new(io::Cursor::new("hola\r\nmundo\nfin"));
        assert_eq!(r.next_line().unwrap().as_deref(), Some("hola"));
        assert_eq!(r.next_line().unwrap().as_deref(), Some("mundo"));
        assert_eq!(r.next_line().unwrap().as_deref(), Some("fin"));
        assert_eq!(r.next_line().unwrap(), None);
    }

    #[test]
    fn scripted_reader_runs_dry() {
        let mut r = ScriptedReader::new(["a", "b"]);
        assert_eq!(r.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(r.remaining(), 1);
        r.next_line().unwrap();
        assert_eq!(r.next_line().unwrap(), None);
    }
}
