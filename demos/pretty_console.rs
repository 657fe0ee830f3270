//! Pretty console example
//!
//! Builds a logger from `LogOptions` and writes a few records in each
//! output mode. Pass `--log-json` and friends with the `cli` feature:
//!
//! ```text
//! cargo run --example pretty_console --features cli -- --log-json --log-level trace
//! ```

use logshim::prelude::*;
use std::fs::File;
use std::io::Write;

#[cfg(feature = "cli")]
fn options() -> LogOptions {
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        log: LogOptions,
    }

    Cli::parse().log
}

#[cfg(not(feature = "cli"))]
fn options() -> LogOptions {
    LogOptions {
        level: "trace".to_string(),
        json: true,
        ..LogOptions::default()
    }
}

fn main() -> Result<()> {
    let options = options();
    println!("=== {:?} output ===\n", options.output_mode());

    let writer: Option<Box<dyn Write + Send>> = if options.file.is_empty() {
        None
    } else {
        Some(Box::new(File::create(&options.file)?))
    };
    let logger = build_logger(&options, writer)?;

    logger.trace("resolving configuration");
    logger.log_attrs(
        LogLevel::Info,
        "server started",
        [Attr::new("port", 8080), Attr::new("tls", true)],
    );
    logger.log_attrs(
        LogLevel::Warn,
        "slow request",
        [Attr::new("path", "/api/users"), Attr::new("elapsed_ms", 912.5)],
    );
    logger.error("upstream unavailable");
    logger.flush()?;

    println!("\n=== Foreign lines pass through the pretty writer ===\n");
    let mut pretty = PrettyJsonWriter::new(std::io::stdout());
    pretty.write_all(b"plain text from a child process\n")?;
    pretty.write_all(br#"{"time":"2024-01-02T15:04:05.123Z","level":"DEBUG","msg":"from elsewhere","pid":42}"#)?;

    let metrics = logger.metrics();
    println!(
        "\nlogged={} filtered={} dropped={}",
        metrics.total_logged(),
        metrics.filtered_count(),
        metrics.dropped_count()
    );

    Ok(())
}
