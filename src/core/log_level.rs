//! Log level definitions
//!
//! Levels sit on a signed scale with gaps of four between the conventional
//! points, so `Trace` can live below `Debug` without renumbering the rest.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum LogLevel {
    Trace = -8,
    Debug = -4,
    #[default]
    Info = 0,
    Warn = 4,
    Error = 8,
}

/// Returned when a severity string is not one of the recognized names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid log level: '{input}'")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The text that failed to parse, as supplied by the caller
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Three-letter tag used by the console appender
    pub fn short_name(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRC",
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WRN",
            LogLevel::Error => "ERR",
        }
    }

    /// Position on the severity scale
    pub fn value(&self) -> i8 {
        *self as i8
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => Cyan,
            LogLevel::Debug => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
        }
    }

    fn parse_standard(s: &str) -> Option<Self> {
        match s {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();

        match Self::parse_standard(&lowered) {
            Some(level) => Ok(level),
            None if lowered == "trace" => Ok(LogLevel::Trace),
            None => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        for (input, expected) in [
            ("trace", LogLevel::Trace),
            ("TRACE", LogLevel::Trace),
            ("Debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("wArN", LogLevel::Warn),
            ("ERROR", LogLevel::Error),
        ] {
            assert_eq!(input.parse::<LogLevel>().unwrap(), expected, "input {input}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for input in ["", "warning", "fatal", "verbose", " info", "info "] {
            let err = input.parse::<LogLevel>().unwrap_err();
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn test_trace_below_debug() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Trace.value() < LogLevel::Debug.value());
        assert_eq!(LogLevel::Info.value(), 0);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(LogLevel::Trace.to_string(), "TRACE");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(format!("{:<5}|", LogLevel::Info), "INFO |");
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&LogLevel::Trace).unwrap();
        assert_eq!(json, "\"TRACE\"");

        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);

        assert!(serde_json::from_str::<LogLevel>("\"loud\"").is_err());
    }
}
