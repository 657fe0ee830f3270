//! Explicit carrier for the logger of a request or operation
//!
//! Code that needs to log takes a [`LogScope`] (or a `&Logger`) as a
//! parameter instead of reaching for a global. A scope without a logger
//! resolves to the process-wide default, so asking for a logger never
//! fails.
//!
//! ```
//! use logshim::prelude::*;
//!
//! fn handle(scope: &LogScope) {
//!     scope.logger().info("handling request");
//! }
//!
//! let buffer = MemoryWriter::new();
//! let logger = Logger::with_appender(LogLevel::Info, JsonAppender::new(buffer.clone()));
//!
//! handle(&LogScope::new().with_logger(logger));
//! assert_eq!(buffer.lines().len(), 1);
//! ```

use crate::appenders::ConsoleAppender;
use crate::core::{LogLevel, Logger, LoggerError, Result};
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide fallback logger
///
/// Initialized on first use to a console logger on stderr at `Info`,
/// unless [`set_default_logger`] ran first. Read-only afterwards.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::with_appender(LogLevel::Info, ConsoleAppender::new()))
}

/// Install the process-wide fallback logger
///
/// Only the first installation wins; later calls, or calls after
/// [`default_logger`] has already been used, fail.
pub fn set_default_logger(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER.set(logger).map_err(|_| {
        LoggerError::config("default logger", "already initialized")
    })
}

/// Request- or operation-scoped logging context
#[derive(Debug, Clone, Default)]
pub struct LogScope {
    logger: Option<Logger>,
}

impl LogScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `logger`, replacing any logger already carried
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The attached logger, or the process-wide default
    pub fn logger(&self) -> &Logger {
        match self.logger {
            Some(ref logger) => logger,
            None => default_logger(),
        }
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }
}
