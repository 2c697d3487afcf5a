use std::io::BufRead;

use crate::error::{ErrorKind, ParseError};

/// Forward-only line reader that remembers where it is in the input.
///
/// Lines are returned without their trailing `\n` or `\r\n`. The line counter
/// is 1-based and names the line most recently returned; once the input is
/// exhausted it moves one past the last line so end-of-input errors point
/// just after the final line.
pub struct LineReader<R> {
    inner: R,
    line: usize,
    eof: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            eof: false,
        }
    }

    /// Reads the next logical line, or `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        if self.eof {
            return Ok(None);
        }

        let mut buf = String::new();
        let read = match self.inner.read_line(&mut buf) {
            Ok(n) => n,
            Err(err) => return Err(ParseError::new(self.line + 1, ErrorKind::Io(err))),
        };
        self.line += 1;
        if read == 0 {
            self.eof = true;
            return Ok(None);
        }

        Ok(Some(strip_line_ending(buf)))
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line.max(1)
    }

    /// Decorates `kind` with the current line number.
    pub fn wrap_error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(self.line(), kind)
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
