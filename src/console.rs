use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Line-oriented prompt/response console
///
/// Wraps any reader and writer so sessions can run against the terminal
/// or against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one line of input.
    ///
    /// Returns `None` once input is exhausted. The trailing line ending is
    /// stripped; other whitespace is left for the caller.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }

        let stripped = line.trim_end_matches(['\n', '\r']);
        Ok(Some(stripped.to_string()))
    }

    /// Print one line
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
