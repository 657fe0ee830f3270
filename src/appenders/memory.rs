//! In-memory writer for capturing log output
//!
//! `MemoryWriter` is a cloneable `io::Write` target backed by a shared
//! buffer. Clones see the same bytes, so one clone can be handed to an
//! appender while another is kept to inspect what was written.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Non-empty lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.contents_string()
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Take the buffered bytes, leaving the buffer empty
    pub fn drain(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let writer = MemoryWriter::new();
        let mut handle = writer.clone();

        handle.write_all(b"first\n\nsecond\n").unwrap();

        assert_eq!(writer.lines(), vec!["first", "second"]);
        assert_eq!(writer.drain(), b"first\n\nsecond\n");
        assert!(writer.is_empty());
    }
}
