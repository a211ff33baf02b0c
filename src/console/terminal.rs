#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::console::{Console, CLEAR_WARNING};

/// Console on a line reader and a terminal writer, stdin and stdout by
/// default.
pub struct Terminal<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
}

impl Terminal {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        // undecodable bytes become U+FFFD and fail validation, not the prompt
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn clear(&mut self, warn: bool) -> anyhow::Result<()> {
        if warn {
            // only visible when the terminal ignores the escape sequence
            self.write_line(CLEAR_WARNING)?;
        }
        execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
