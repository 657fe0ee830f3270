//! Human-friendly rewriting of serialized records
//!
//! [`reformat`] takes one JSON record, pulls out `time`, `level` and `msg`,
//! moves every other key under `extra`, and re-encodes the result with
//! four-space indentation. Input that cannot be rewritten is handed back
//! untouched as [`Reformatted::PassThrough`].
//!
//! [`PrettyJsonWriter`] applies that transform to every `write` call and
//! always writes one of the two outcomes, so a bad line never disappears.

use super::log_record::{LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
use super::timestamp::{self, TimestampFormat};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// Outcome of rewriting a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reformatted<'a> {
    /// The indented rendering, newline-terminated
    Pretty(Vec<u8>),
    /// The original bytes, to be written unchanged
    PassThrough(&'a [u8]),
}

impl Reformatted<'_> {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Reformatted::Pretty(bytes) => bytes,
            Reformatted::PassThrough(raw) => raw,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Reformatted::PassThrough(_))
    }
}

#[derive(Debug, Default, Serialize)]
struct PrettyRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    level: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    msg: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    extra: Map<String, Value>,
}

/// Rewrite one serialized record into its indented form
///
/// Only the first JSON value in `raw` is considered; trailing whitespace
/// such as the record's newline is ignored.
///
/// ```
/// use logshim::core::reformatter::{reformat, Reformatted};
///
/// let raw = br#"{"time":"2024-01-02T15:04:05.123Z","level":"INFO","msg":"hello","k":"v"}"#;
/// let pretty = reformat(raw);
/// assert!(!pretty.is_pass_through());
///
/// assert_eq!(reformat(b"plain text"), Reformatted::PassThrough(b"plain text"));
/// ```
pub fn reformat(raw: &[u8]) -> Reformatted<'_> {
    let Some(mut bag) = decode_object(raw) else {
        return Reformatted::PassThrough(raw);
    };

    let mut record = PrettyRecord::default();

    if let Some(Value::String(text)) = bag.get(TIME_KEY) {
        let Some(ts) = timestamp::parse_rfc3339(text) else {
            return Reformatted::PassThrough(raw);
        };
        record.time = TimestampFormat::Kitchen.format(&ts);
        bag.remove(TIME_KEY);
    }

    if let Some(level) = take_string(&mut bag, LEVEL_KEY) {
        record.level = level;
    }

    if let Some(msg) = take_string(&mut bag, MESSAGE_KEY) {
        record.msg = msg;
    }

    record.extra = bag;

    match encode(&record) {
        Ok(bytes) => Reformatted::Pretty(bytes),
        Err(_) => Reformatted::PassThrough(raw),
    }
}

fn decode_object(raw: &[u8]) -> Option<Map<String, Value>> {
    serde_json::Deserializer::from_slice(raw)
        .into_iter::<Map<String, Value>>()
        .next()?
        .ok()
}

fn take_string(bag: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !bag.get(key).is_some_and(Value::is_string) {
        return None;
    }
    match bag.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn encode(record: &PrettyRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(128);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    record.serialize(&mut ser)?;
    out.push(b'\n');
    Ok(out)
}

/// Writer adaptor that rewrites each record before forwarding it
///
/// Every `write` call is treated as one complete record. The reported byte
/// count is always the full input length, whichever branch was written.
pub struct PrettyJsonWriter<W: Write> {
    inner: W,
}

impl<W: Write> PrettyJsonWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for PrettyJsonWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(reformat(buf).as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
