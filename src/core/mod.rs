//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod reformatter;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use log_context::{Attr, FieldValue, LogContext};
pub use log_level::{LogLevel, ParseLevelError};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use reformatter::{reformat, PrettyJsonWriter, Reformatted};
pub use timestamp::TimestampFormat;
