//! Console output implementation

use crate::core::{LogOutput, Result};
use std::io::Write;

/// Reference sink: writes rendered strings verbatim to stdout.
///
/// The format owns line termination, so nothing is appended here.
pub struct ConsoleOutput {
    stdout: std::io::Stdout,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl LogOutput for ConsoleOutput {
    fn write(&mut self, rendered: &str) -> Result<()> {
        self.stdout.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
