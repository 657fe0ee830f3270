//! Console appender implementation
//!
//! Renders records as one human-readable line:
//! `3:04PM INF request done status=200 path=/health`

use crate::core::{Appender, LogLevel, LogRecord, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Write};

pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    /// Console appender on stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::Kitchen,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use logshim::appenders::ConsoleAppender;
    /// use logshim::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339Millis);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace newlines, carriage returns and tabs with escape sequences
    /// so one record always stays on one line
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn level_tag(&self, level: LogLevel) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return level.short_name().color(level.color_code()).bold().to_string();
        }

        level.short_name().to_string()
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let mut line = format!(
            "{} {} {}",
            self.timestamp_format.format(&record.timestamp),
            self.level_tag(record.level),
            Self::sanitize_message(&record.message)
        );

        for attr in record.context.attrs() {
            line.push(' ');
            line.push_str(&Self::sanitize_message(&attr.to_string()));
        }

        line.push('\n');
        line
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.format_line(record);
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
