//! Legacy adapter example
//!
//! Shows printf/println-style call sites feeding a structured logger, with
//! extractors that pull attributes out of the rendered text.

use logshim::prelude::*;
use logshim::{legacy_printf, legacy_println};

/// Code written against a plain `fmt::Write` sink, unaware of logging
fn report_progress(out: &mut impl std::fmt::Write, done: usize, total: usize) -> std::fmt::Result {
    writeln!(out, "progress done={} total={}", done, total)
}

fn main() -> Result<()> {
    let logger = Logger::with_appender(
        LogLevel::Trace,
        ConsoleAppender::new().with_colors(true),
    );

    println!("=== Identity extractor ===");
    let plain = LegacyLogger::new(Some(logger.clone()));
    legacy_printf!(plain, "listening on {}:{}", "0.0.0.0", 8080);
    legacy_println!(plain, "cache", "miss", 3);

    println!("\n=== Key/value extractor at debug ===");
    let mut kv = LegacyLogger::builder(Some(logger.clone()))
        .level(LogLevel::Debug)
        .extractor(KeyValueExtractor)
        .build();
    legacy_printf!(kv, "request served path={} status={}", "/health", 200);
    for done in [1, 2, 3] {
        report_progress(&mut kv, done, 3).map_err(|e| LoggerError::other(e.to_string()))?;
    }

    println!("\n=== Closure extractor ===");
    let tagged = LegacyLogger::builder(Some(logger.clone()))
        .level(LogLevel::Error)
        .extractor(|text: &str| match text.strip_prefix("ERR: ") {
            Some(rest) => (rest.to_string(), vec![Attr::new("kind", "error")]),
            None => (text.to_string(), Vec::new()),
        })
        .build();
    legacy_println!(tagged, "ERR: disk full");

    println!("\n=== No logger: calls are ignored ===");
    let silent = LegacyLogger::new(None);
    legacy_printf!(silent, "nobody sees {}", "this");

    logger.info(format!("legacy calls recorded: {}", logger.metrics().total_logged()));
    logger.flush()
}
