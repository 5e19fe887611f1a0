//! File output implementation

use crate::core::{LogOutput, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered append-mode file sink.
pub struct FileOutput {
    writer: BufWriter<File>,
    path: String,
}

impl FileOutput {
    /// Open (or create) the file at `path` for appending
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.as_ref().display().to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl LogOutput for FileOutput {
    fn write(&mut self, rendered: &str) -> Result<()> {
        self.writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_output_appends() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.log");

        let mut output = FileOutput::new(&path)?;
        output.write("first\n")?;
        output.write("second\n")?;
        output.flush()?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_file_output_reopens_existing() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.log");

        {
            let mut output = FileOutput::new(&path)?;
            output.write("one\n")?;
            output.flush()?;
        }
        {
            let mut output = FileOutput::new(&path)?;
            output.write("two\n")?;
            output.flush()?;
        }

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.lines().count(), 2);
        Ok(())
    }
}
