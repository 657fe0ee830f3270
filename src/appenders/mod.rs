//! Appender implementations

pub mod console;
pub mod json;
pub mod memory;

pub use console::ConsoleAppender;
pub use json::JsonAppender;
pub use memory::MemoryWriter;

pub use crate::core::Appender;
