//! # logshim
//!
//! A structured-logging adaptation layer. It turns both structured calls
//! and legacy printf-style calls into one stream of structured records,
//! and renders that stream as JSON lines or as an indented, human-friendly
//! rewrite of each record.
//!
//! ## Features
//!
//! - **Levels**: `trace` < `debug` < `info` < `warn` < `error`, parsed case-insensitively
//! - **Legacy adapter**: printf/println call sites become attributed records
//! - **Reformatter**: JSON records rewritten for reading, bad input passed through untouched
//! - **Sink selection**: console, pretty JSON or raw JSON lines from three options
//!
//! ```
//! use logshim::prelude::*;
//!
//! let buffer = MemoryWriter::new();
//! let options = LogOptions { json: true, ..LogOptions::default() };
//! let logger = build_logger(&options, Some(Box::new(buffer.clone()))).unwrap();
//!
//! logger.log_attrs(LogLevel::Info, "hello", [Attr::new("k", "v")]);
//! assert!(buffer.contents_string().contains("\"extra\""));
//! ```

pub mod app;
pub mod appenders;
pub mod config;
pub mod core;
pub mod legacy;
pub mod macros;
pub mod scope;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, JsonAppender, MemoryWriter};
    pub use crate::config::{build_logger, LogOptions, OutputMode};
    pub use crate::core::{
        reformat, Appender, Attr, FieldValue, LogContext, LogLevel, LogRecord, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, PrettyJsonWriter, Reformatted, Result,
        TimestampFormat,
    };
    pub use crate::legacy::{
        IdentityExtractor, KeyValueExtractor, LegacyLogger, LegacyLoggerBuilder, MessageExtractor,
    };
    pub use crate::scope::{default_logger, set_default_logger, LogScope};
}

pub use crate::appenders::{ConsoleAppender, JsonAppender, MemoryWriter};
pub use crate::config::{build_logger, LogOptions, OutputMode};
pub use crate::core::{
    reformat, Appender, Attr, FieldValue, LogContext, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, ParseLevelError, PrettyJsonWriter, Reformatted, Result,
    TimestampFormat,
};
pub use crate::legacy::{LegacyLogger, MessageExtractor};
pub use crate::scope::{default_logger, set_default_logger, LogScope};
