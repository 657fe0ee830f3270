//! JSON appender for structured logging

use crate::core::reformatter::PrettyJsonWriter;
use crate::core::{Appender, LogRecord, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Each record reaches the writer in a single `write_all` call, so wrapping
/// writers such as [`PrettyJsonWriter`] see one complete record at a time.
pub struct JsonAppender {
    writer: Box<dyn Write + Send>,
}

impl JsonAppender {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// JSON appender whose output is rewritten into the indented form
    pub fn pretty<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(PrettyJsonWriter::new(writer))
    }

    /// Append to the file at `path`, creating it if needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self::new(file))
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let line = record.to_json_line()?;
        self.writer.write_all(&line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
