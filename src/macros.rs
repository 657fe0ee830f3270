//! Logging macros for ergonomic log message formatting.
//!
//! The leveled macros format their arguments like `format!` and forward
//! to a [`Logger`](crate::Logger). The `legacy_*` macros drive a
//! [`LegacyLogger`](crate::LegacyLogger).
//!
//! # Examples
//!
//! ```
//! use logshim::prelude::*;
//! use logshim::info;
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use logshim::prelude::*;
/// # let logger = Logger::new();
/// use logshim::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// printf-style call on a legacy adapter.
///
/// # Examples
///
/// ```
/// # use logshim::prelude::*;
/// use logshim::legacy_printf;
/// let legacy = LegacyLogger::new(None);
/// legacy_printf!(legacy, "listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! legacy_printf {
    ($legacy:expr, $($arg:tt)+) => {
        $legacy.printf(format_args!($($arg)+))
    };
}

/// println-style call on a legacy adapter; operands are joined by spaces.
///
/// # Examples
///
/// ```
/// # use logshim::prelude::*;
/// use logshim::legacy_println;
/// let legacy = LegacyLogger::new(None);
/// legacy_println!(legacy, "cache", "miss", 3);
/// ```
#[macro_export]
macro_rules! legacy_println {
    ($legacy:expr $(, $operand:expr)* $(,)?) => {
        $legacy.println(&[$(&$operand as &dyn ::std::fmt::Display),*])
    };
}
