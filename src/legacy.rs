//! Adapter for unstructured, printf-style call sites
//!
//! [`LegacyLogger`] exposes `printf`/`println` entry points (and
//! `std::fmt::Write`) for code that only knows how to hand over a line of
//! text. Each call renders the text, runs it through a
//! [`MessageExtractor`] to split it into a message and attributes, and
//! emits exactly one structured record at the adapter's fixed level.
//!
//! ```
//! use logshim::prelude::*;
//! use logshim::{legacy_printf, legacy_println};
//!
//! let buffer = MemoryWriter::new();
//! let logger = Logger::with_appender(LogLevel::Info, JsonAppender::new(buffer.clone()));
//!
//! let legacy = LegacyLogger::builder(Some(logger))
//!     .level(LogLevel::Warn)
//!     .extractor(KeyValueExtractor)
//!     .build();
//!
//! legacy_printf!(legacy, "retrying in {}s attempt={}", 5, 2);
//! legacy_println!(legacy, "pool", "exhausted");
//!
//! assert_eq!(buffer.lines().len(), 2);
//! ```

use crate::core::{Attr, LogLevel, Logger};
use std::fmt;
use std::sync::Arc;

/// Splits rendered text into a message and attributes
///
/// Implementations must be pure: no I/O, no logging.
pub trait MessageExtractor: Send + Sync {
    fn extract(&self, text: &str) -> (String, Vec<Attr>);
}

impl<F> MessageExtractor for F
where
    F: Fn(&str) -> (String, Vec<Attr>) + Send + Sync,
{
    fn extract(&self, text: &str) -> (String, Vec<Attr>) {
        self(text)
    }
}

/// Message unchanged, no attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl MessageExtractor for IdentityExtractor {
    fn extract(&self, text: &str) -> (String, Vec<Attr>) {
        (text.to_string(), Vec::new())
    }
}

/// Trailing `key=value` tokens become string attributes
///
/// Values may be double-quoted to include spaces; `\"` and `\\` are
/// unescaped inside quotes. Scanning stops at the first token from the end
/// that is not a pair, and everything before it is the message.
///
/// ```
/// use logshim::legacy::{KeyValueExtractor, MessageExtractor};
///
/// let (msg, attrs) = KeyValueExtractor.extract(r#"upload failed file="a b.txt" code=7"#);
/// assert_eq!(msg, "upload failed");
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs[0].value.to_string(), "a b.txt");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueExtractor;

impl KeyValueExtractor {
    fn is_key(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }

    /// Bare values are taken as is. A value that opens with a quote must
    /// also end with one; anything like `"b c"d` is not a value.
    fn unquote(value: &str) -> Option<String> {
        let inner = match value.strip_prefix('"') {
            None => return Some(value.to_string()),
            Some(rest) => rest.strip_suffix('"')?,
        };

        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(next @ ('"' | '\\')) => out.push(next),
                    Some(next) => {
                        out.push('\\');
                        out.push(next);
                    }
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        Some(out)
    }

    fn parse_pair(token: &str) -> Option<Attr> {
        let (key, value) = token.split_once('=')?;
        if !Self::is_key(key) {
            return None;
        }
        Some(Attr::new(key, Self::unquote(value)?))
    }
}

/// Byte spans of whitespace-separated tokens, keeping quoted runs together
fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, c) in text.char_indices() {
        if start.is_none() {
            if c.is_whitespace() {
                continue;
            }
            start = Some(idx);
        }

        if escaped {
            escaped = false;
        } else if in_quotes && c == '\\' {
            escaped = true;
        } else if c == '"' {
            in_quotes = !in_quotes;
        } else if c.is_whitespace() && !in_quotes {
            if let Some(s) = start.take() {
                spans.push((s, idx));
            }
        }
    }

    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

impl MessageExtractor for KeyValueExtractor {
    fn extract(&self, text: &str) -> (String, Vec<Attr>) {
        let mut attrs = Vec::new();
        let mut message_end = text.len();

        for &(start, end) in token_spans(text).iter().rev() {
            match Self::parse_pair(&text[start..end]) {
                Some(attr) => {
                    attrs.push(attr);
                    message_end = start;
                }
                None => break,
            }
        }

        attrs.reverse();
        (text[..message_end].trim_end().to_string(), attrs)
    }
}

/// Structured logger behind a printf/println-style surface
///
/// Without a logger every call is a no-op. Calls never fail.
///
/// As a `fmt::Write` sink, each `write_str`/`write_fmt` call is one record.
/// Single characters from `write_char` are collected until a newline (or
/// the next string write, or drop) so char-by-char writers still produce
/// whole lines.
pub struct LegacyLogger {
    logger: Option<Logger>,
    level: LogLevel,
    extractor: Arc<dyn MessageExtractor>,
    pending: String,
}

impl LegacyLogger {
    /// Adapter at `Info` with the identity extractor
    pub fn new(logger: Option<Logger>) -> Self {
        Self::builder(logger).build()
    }

    pub fn builder(logger: Option<Logger>) -> LegacyLoggerBuilder {
        LegacyLoggerBuilder::new(logger)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    /// Render format arguments and emit them as one record
    ///
    /// Usually called through [`legacy_printf!`](crate::legacy_printf).
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if self.logger.is_none() {
            return;
        }
        self.emit(&args.to_string());
    }

    /// Render operands separated by single spaces and emit them as one record
    ///
    /// Every pair of operands gets exactly one space between them, whatever
    /// their types. This intentionally differs from Go's `fmt.Sprint`, which
    /// only adds a space when neither neighbor is a string.
    ///
    /// Usually called through [`legacy_println!`](crate::legacy_println).
    pub fn println(&self, operands: &[&dyn fmt::Display]) {
        if self.logger.is_none() {
            return;
        }

        let text = operands
            .iter()
            .map(|operand| operand.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(&text);
    }

    /// Emit already-rendered text as one record
    pub fn print(&self, text: &str) {
        if self.logger.is_none() {
            return;
        }
        self.emit(text);
    }

    fn emit(&self, text: &str) {
        if let Some(ref logger) = self.logger {
            let (message, attrs) = self.extractor.extract(text);
            logger.log_attrs(self.level, message, attrs);
        }
    }
}

impl LegacyLogger {
    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        self.print(&text);
    }
}

impl fmt::Write for LegacyLogger {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.flush_pending();
        self.print(s.trim_end_matches(['\n', '\r']));
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        match c {
            '\n' => self.flush_pending(),
            '\r' => {}
            _ if self.logger.is_some() => self.pending.push(c),
            _ => {}
        }
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.flush_pending();
        if self.logger.is_some() {
            let text = args.to_string();
            self.emit(text.trim_end_matches(['\n', '\r']));
        }
        Ok(())
    }
}

impl Clone for LegacyLogger {
    /// Clones share the logger and extractor but not unfinished characters
    fn clone(&self) -> Self {
        Self {
            logger: self.logger.clone(),
            level: self.level,
            extractor: Arc::clone(&self.extractor),
            pending: String::new(),
        }
    }
}

impl Drop for LegacyLogger {
    fn drop(&mut self) {
        self.flush_pending();
    }
}

impl fmt::Debug for LegacyLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyLogger")
            .field("logger", &self.logger)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// Overrides for [`LegacyLogger`] defaults
pub struct LegacyLoggerBuilder {
    logger: Option<Logger>,
    level: LogLevel,
    extractor: Arc<dyn MessageExtractor>,
}

impl LegacyLoggerBuilder {
    pub fn new(logger: Option<Logger>) -> Self {
        Self {
            logger,
            level: LogLevel::Info,
            extractor: Arc::new(IdentityExtractor),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn extractor<E: MessageExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    pub fn build(self) -> LegacyLogger {
        LegacyLogger {
            logger: self.logger,
            level: self.level,
            extractor: self.extractor,
            pending: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{JsonAppender, MemoryWriter};
    use crate::core::FieldValue;
    use std::fmt::Write as _;

    fn capture(level: LogLevel) -> (Logger, MemoryWriter) {
        let buffer = MemoryWriter::new();
        let logger = Logger::with_appender(level, JsonAppender::new(buffer.clone()));
        (logger, buffer)
    }

    fn records(buffer: &MemoryWriter) -> Vec<serde_json::Value> {
        buffer
            .lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn err_prefix(text: &str) -> (String, Vec<Attr>) {
        match text.strip_prefix("ERR: ") {
            Some(rest) => (rest.to_string(), vec![Attr::new("kind", "error")]),
            None => (text.to_string(), Vec::new()),
        }
    }

    #[test]
    fn test_no_logger_is_noop() {
        let mut legacy = LegacyLogger::new(None);
        legacy.printf(format_args!("value {}", 1));
        legacy.println(&[&"a", &2]);
        legacy.print("text");
        assert!(writeln!(legacy, "line {}", 3).is_ok());
    }

    #[test]
    fn test_defaults() {
        let legacy = LegacyLogger::new(None);
        assert_eq!(legacy.level(), LogLevel::Info);
        assert!(legacy.logger().is_none());
    }

    #[test]
    fn test_printf_identity() {
        let (logger, buffer) = capture(LogLevel::Info);
        let legacy = LegacyLogger::new(Some(logger));

        legacy.printf(format_args!("connected to {}:{}", "db", 5432));

        let recs = records(&buffer);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["msg"], "connected to db:5432");
        assert_eq!(recs[0]["level"], "INFO");
        assert_eq!(recs[0].as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_println_spacing() {
        let (logger, buffer) = capture(LogLevel::Info);
        let legacy = LegacyLogger::new(Some(logger));

        legacy.println(&[&"queue", &3, &"items"]);

        assert_eq!(records(&buffer)[0]["msg"], "queue 3 items");
    }

    #[test]
    fn test_custom_extractor_and_level() {
        let (logger, buffer) = capture(LogLevel::Debug);
        let legacy = LegacyLogger::builder(Some(logger))
            .level(LogLevel::Warn)
            .extractor(err_prefix)
            .build();

        legacy.println(&[&"ERR: disk full"]);

        let recs = records(&buffer);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["msg"], "disk full");
        assert_eq!(recs[0]["kind"], "error");
        assert_eq!(recs[0]["level"], "WARN");
    }

    #[test]
    fn test_level_below_logger_minimum_is_filtered() {
        let (logger, buffer) = capture(LogLevel::Info);
        let legacy = LegacyLogger::builder(Some(logger.clone()))
            .level(LogLevel::Trace)
            .build();

        legacy.print("too chatty");

        assert!(buffer.is_empty());
        assert_eq!(logger.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_fmt_write_emits_one_record_per_call() {
        let (logger, buffer) = capture(LogLevel::Info);
        let mut legacy = LegacyLogger::new(Some(logger));

        writeln!(legacy, "first {}", 1).unwrap();
        write!(legacy, "second").unwrap();

        let recs = records(&buffer);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["msg"], "first 1");
        assert_eq!(recs[1]["msg"], "second");
    }

    #[test]
    fn test_key_value_extractor() {
        let (msg, attrs) = KeyValueExtractor.extract("user login ok user=alice id=42");
        assert_eq!(msg, "user login ok");
        assert_eq!(
            attrs,
            vec![Attr::new("user", "alice"), Attr::new("id", "42")]
        );
    }

    #[test]
    fn test_key_value_extractor_quotes() {
        let (msg, attrs) =
            KeyValueExtractor.extract(r#"saved path="C:\\tmp\\a b" note="say \"hi\"""#);
        assert_eq!(msg, "saved");
        assert_eq!(attrs[0].value, FieldValue::from(r"C:\tmp\a b"));
        assert_eq!(attrs[1].value, FieldValue::from(r#"say "hi""#));
    }

    #[test]
    fn test_key_value_extractor_stops_at_plain_token() {
        let (msg, attrs) = KeyValueExtractor.extract("a=1 then text b=2");
        assert_eq!(msg, "a=1 then text");
        assert_eq!(attrs, vec![Attr::new("b", "2")]);

        let (msg, attrs) = KeyValueExtractor.extract("nothing to see");
        assert_eq!(msg, "nothing to see");
        assert!(attrs.is_empty());

        let (msg, attrs) = KeyValueExtractor.extract("=oops");
        assert_eq!(msg, "=oops");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_write_char_collects_a_line() {
        let (logger, buffer) = capture(LogLevel::Info);
        let mut legacy = LegacyLogger::new(Some(logger));

        for c in "ok\r\nnext".chars() {
            legacy.write_char(c).unwrap();
        }
        assert_eq!(records(&buffer).len(), 1);

        drop(legacy);

        let recs = records(&buffer);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["msg"], "ok");
        assert_eq!(recs[1]["msg"], "next");
    }

    #[test]
    fn test_write_str_flushes_pending_chars_first() {
        let (logger, buffer) = capture(LogLevel::Info);
        let mut legacy = LegacyLogger::new(Some(logger));

        legacy.write_char('a').unwrap();
        legacy.write_str("whole line\n").unwrap();

        let recs = records(&buffer);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["msg"], "a");
        assert_eq!(recs[1]["msg"], "whole line");
    }

    #[test]
    fn test_println_spaces_between_strings() {
        let (logger, buffer) = capture(LogLevel::Info);
        let legacy = LegacyLogger::new(Some(logger));

        // fmt.Sprint would render this as "ab1 2"
        legacy.println(&[&"a", &"b", &1, &2]);

        assert_eq!(records(&buffer)[0]["msg"], "a b 1 2");
    }

    #[test]
    fn test_key_value_extractor_rejects_partial_quotes() {
        let (msg, attrs) = KeyValueExtractor.extract(r#"upload a="b c"d"#);
        assert_eq!(msg, r#"upload a="b c"d"#);
        assert!(attrs.is_empty());

        let (msg, attrs) = KeyValueExtractor.extract(r#"upload a="b c"d code=7"#);
        assert_eq!(msg, r#"upload a="b c"d"#);
        assert_eq!(attrs, vec![Attr::new("code", "7")]);

        let (_, attrs) = KeyValueExtractor.extract(r#"empty v="""#);
        assert_eq!(attrs, vec![Attr::new("v", "")]);
    }

    #[test]
    fn test_identity_extractor() {
        let (msg, attrs) = IdentityExtractor.extract("  keep  spacing ");
        assert_eq!(msg, "  keep  spacing ");
        assert!(attrs.is_empty());
    }
}
