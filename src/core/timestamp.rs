//! Timestamp formatting utilities
//!
//! Records carry a timestamp with its UTC offset. Machine-readable output
//! uses RFC 3339 with milliseconds; human-readable output uses a short
//! clock form such as `3:04PM`.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use logshim::core::TimestampFormat;
/// use chrono::DateTime;
///
/// let ts = DateTime::parse_from_rfc3339("2024-01-02T15:04:05.123Z").unwrap();
/// assert_eq!(TimestampFormat::Kitchen.format(&ts), "3:04PM");
/// assert_eq!(TimestampFormat::Rfc3339Millis.format(&ts), "2024-01-02T15:04:05.123Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123+02:00`
    ///
    /// UTC timestamps end in `Z`. This is the format written into the
    /// `time` field of serialized records.
    #[default]
    Rfc3339Millis,

    /// RFC 3339 with nanoseconds: `2025-01-08T10:30:45.123456789Z`
    Rfc3339Nanos,

    /// Clock time with AM/PM marker and no date: `3:04PM`
    Kitchen,

    /// Custom strftime format
    ///
    /// ```
    /// use logshim::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this format, in the timestamp's own offset
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339Millis => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339Nanos => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            TimestampFormat::Kitchen => datetime.format("%-I:%M%p").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Parse an RFC 3339 timestamp; fractional seconds are optional
///
/// Only the strict form is accepted: an uppercase `T` between date and
/// time, an uppercase `Z` or a numeric `+hh:mm` offset, and seconds below
/// 60. Space separators, lowercase markers and leap seconds are rejected.
///
/// ```
/// use logshim::core::timestamp::parse_rfc3339;
///
/// assert!(parse_rfc3339("2024-01-02T15:04:05.123Z").is_some());
/// assert!(parse_rfc3339("2024-01-02 15:04:05.123Z").is_none());
/// ```
pub fn parse_rfc3339(text: &str) -> Option<DateTime<FixedOffset>> {
    if !has_strict_shape(text.as_bytes()) {
        return None;
    }
    DateTime::parse_from_rfc3339(text).ok()
}

/// `YYYY-MM-DDThh:mm:ss[.frac](Z|±hh:mm)`, checked byte-wise before chrono
fn has_strict_shape(b: &[u8]) -> bool {
    // shortest accepted form: 2024-01-02T15:04:05Z
    if b.len() < 20 || b[10] != b'T' {
        return false;
    }

    let seconds = &b[17..19];
    if !seconds.iter().all(u8::is_ascii_digit) || seconds[0] >= b'6' {
        return false;
    }

    match b[b.len() - 1] {
        b'Z' => true,
        c if c.is_ascii_digit() => {
            let offset = &b[b.len() - 6..];
            matches!(offset[0], b'+' | b'-') && offset[3] == b':'
        }
        _ => false,
    }
}

/// Current local time with its offset
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
