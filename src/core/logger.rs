//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log_context::{Attr, LogContext},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Cheaply cloneable handle to a synchronous structured logger
///
/// Each logger owns at most one appender. A logger without an appender
/// accepts every call and discards the records.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    min_level: LogLevel,
    appender: Option<Mutex<Box<dyn Appender>>>,
    /// Metrics for observability (dropped count, total logged, etc.)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger at `Info` that discards everything
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Logger writing every record at or above `min_level` to `appender`
    pub fn with_appender<A: Appender + 'static>(min_level: LogLevel, appender: A) -> Self {
        Self::builder().min_level(min_level).appender(appender).build()
    }

    /// Hand one record to the appender with panic isolation
    ///
    /// Appender errors and panics are reported on stderr and counted as
    /// dropped; they never reach the caller.
    fn process_sync(appender: &mut dyn Appender, record: &LogRecord, metrics: &LoggerMetrics) {
        let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(record)
        }));

        match append_result {
            Ok(Ok(())) => {
                metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                metrics.record_dropped();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    appender.name(),
                    panic_msg
                );
                metrics.record_dropped();
            }
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.inner.min_level
    }

    /// Whether a record at `level` would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.inner.min_level
    }

    /// Emit a fully built record, subject to the level filter
    pub fn emit(&self, record: LogRecord) {
        if !self.enabled(record.level) {
            self.inner.metrics.record_filtered();
            return;
        }

        if let Some(ref appender) = self.inner.appender {
            let mut appender = appender.lock();
            Self::process_sync(appender.as_mut(), &record, &self.inner.metrics);
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_with_context(level, message, LogContext::new());
    }

    /// Log with structured context fields
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) {
        if !self.enabled(level) {
            self.inner.metrics.record_filtered();
            return;
        }

        self.emit(LogRecord::new(level, message).with_context(context));
    }

    /// Log with a list of attributes
    pub fn log_attrs(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        if !self.enabled(level) {
            self.inner.metrics.record_filtered();
            return;
        }

        self.emit(LogRecord::new(level, message).with_attrs(attrs));
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(ref appender) = self.inner.appender {
            appender.lock().flush()?;
        }
        Ok(())
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use logshim::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.debug("below the default level");
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appender = self
            .inner
            .appender
            .as_ref()
            .map(|a| a.lock().name().to_string());
        f.debug_struct("Logger")
            .field("min_level", &self.inner.min_level)
            .field("appender", &appender)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logshim::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(JsonAppender::new(Vec::new()))
///     .build();
/// assert!(logger.enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            appender: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the appender, replacing any previous one
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            inner: Arc::new(LoggerInner {
                min_level: self.min_level,
                appender: self.appender.map(Mutex::new),
                metrics: LoggerMetrics::new(),
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
