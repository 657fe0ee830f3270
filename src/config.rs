//! Logger construction from user-facing options
//!
//! Three options drive the result: a level name, an optional log file and a
//! JSON flag. A non-empty file always means raw JSON lines, whatever the
//! flag says. JSON without a file is rewritten into the indented form for
//! people reading a console. Everything else gets the plain console format.
//!
//! ```
//! use logshim::config::{build_logger, LogOptions, OutputMode};
//! use logshim::{LogLevel, MemoryWriter};
//!
//! let options = LogOptions {
//!     level: "debug".to_string(),
//!     json: true,
//!     ..LogOptions::default()
//! };
//! assert_eq!(options.output_mode(), OutputMode::PrettyConsole);
//!
//! let logger = build_logger(&options, Some(Box::new(MemoryWriter::new()))).unwrap();
//! assert_eq!(logger.min_level(), LogLevel::Debug);
//! ```

use crate::appenders::{ConsoleAppender, JsonAppender};
use crate::core::{LogLevel, Logger, LoggerError, Result};
use serde::Deserialize;
use std::io::{self, Write};

/// Logging options as collected from flags or a config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[serde(default)]
pub struct LogOptions {
    /// Minimum level: trace, debug, info, warn or error
    #[cfg_attr(feature = "cli", arg(long = "log-level", default_value = "INFO"))]
    pub level: String,

    /// Log to a file (implies json); the caller opens the file
    #[cfg_attr(feature = "cli", arg(long = "log-file", default_value = ""))]
    pub file: String,

    /// Log in json format
    #[cfg_attr(feature = "cli", arg(long = "log-json"))]
    pub json: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info.to_string(),
            file: String::new(),
            json: false,
        }
    }
}

/// Which rendering a logger built from [`LogOptions`] uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text lines from [`ConsoleAppender`]
    Console,
    /// JSON records rewritten by the reformatter
    PrettyConsole,
    /// Raw JSON lines for a file the caller manages
    JsonFile,
}

impl LogOptions {
    pub fn output_mode(&self) -> OutputMode {
        match (self.file.is_empty(), self.json) {
            (false, _) => OutputMode::JsonFile,
            (true, true) => OutputMode::PrettyConsole,
            (true, false) => OutputMode::Console,
        }
    }

    pub fn min_level(&self) -> Result<LogLevel> {
        Ok(self.level.parse::<LogLevel>()?)
    }
}

/// Build the logger described by `options`, writing to `writer`
///
/// Without a writer output goes to stderr, except when a file is
/// requested: the caller owns the file, so a missing writer is an error.
pub fn build_logger(
    options: &LogOptions,
    writer: Option<Box<dyn Write + Send>>,
) -> Result<Logger> {
    let mode = options.output_mode();

    let writer = match writer {
        Some(writer) => writer,
        None if mode == OutputMode::JsonFile => {
            return Err(LoggerError::config(
                "LogOptions",
                format!(
                    "writer cannot be empty when file '{}' is set (caller manages the file)",
                    options.file
                ),
            ));
        }
        None => Box::new(io::stderr()),
    };

    let min_level = options.min_level()?;
    let builder = Logger::builder().min_level(min_level);

    let logger = match mode {
        OutputMode::Console => builder.appender(ConsoleAppender::with_writer(writer)),
        OutputMode::PrettyConsole => builder.appender(JsonAppender::pretty(writer)),
        OutputMode::JsonFile => builder.appender(JsonAppender::new(writer)),
    }
    .build();

    Ok(logger)
}
