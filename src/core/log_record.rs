//! Structured log record
//!
//! A record serializes as one flat JSON object. The reserved keys `time`,
//! `level` and `msg` come first, followed by the attributes in the order
//! they were added.

use super::log_context::{Attr, LogContext};
use super::log_level::LogLevel;
use super::timestamp::{self, TimestampFormat};
use chrono::{DateTime, FixedOffset};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "msg";

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
    pub context: LogContext,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: timestamp::now(),
            context: LogContext::new(),
        }
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        for attr in attrs {
            self.context.push(attr);
        }
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Serialize as a single JSON line, including the trailing newline
    pub fn to_json_line(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = serde_json::to_vec(self)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl Serialize for LogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.context.len()))?;
        map.serialize_entry(TIME_KEY, &TimestampFormat::Rfc3339Millis.format(&self.timestamp))?;
        map.serialize_entry(LEVEL_KEY, &self.level)?;
        map.serialize_entry(MESSAGE_KEY, &self.message)?;
        for attr in self.context.attrs() {
            map.serialize_entry(&attr.key, &attr.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_record() -> LogRecord {
        let ts = DateTime::parse_from_rfc3339("2024-01-02T15:04:05.123Z").unwrap();
        LogRecord::new(LogLevel::Info, "hello").with_timestamp(ts)
    }

    #[test]
    fn test_reserved_keys_first() {
        let record = fixed_record().with_attrs([Attr::new("zeta", 1), Attr::new("alpha", "a")]);
        let line = String::from_utf8(record.to_json_line().unwrap()).unwrap();

        assert_eq!(
            line,
            "{\"time\":\"2024-01-02T15:04:05.123Z\",\"level\":\"INFO\",\"msg\":\"hello\",\"zeta\":1,\"alpha\":\"a\"}\n"
        );
    }

    #[test]
    fn test_trace_level_name() {
        let mut record = fixed_record();
        record.level = LogLevel::Trace;

        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["level"], "TRACE");
    }

    #[test]
    fn test_message_is_not_altered() {
        let record = LogRecord::new(LogLevel::Warn, "line one\nline two");
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["msg"], "line one\nline two");
    }
}
