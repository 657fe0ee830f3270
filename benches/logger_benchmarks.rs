//! Criterion benchmarks for logshim

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logshim::prelude::*;
use std::io;
use std::sync::Arc;

const SAMPLE_RECORD: &[u8] =
    br#"{"time":"2024-01-02T15:04:05.123Z","level":"INFO","msg":"request served","path":"/api/users","status":200,"elapsed_ms":12.5}"#;

// ============================================================================
// Level Parsing Benchmarks
// ============================================================================

fn bench_level_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_parsing");
    group.throughput(Throughput::Elements(1));

    for input in ["info", "TRACE", "Error", "verbose"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(input.parse::<LogLevel>().is_ok()));
        });
    }

    group.finish();
}

// ============================================================================
// Reformatter Benchmarks
// ============================================================================

fn bench_reformat(c: &mut Criterion) {
    let mut group = c.benchmark_group("reformat");
    group.throughput(Throughput::Bytes(SAMPLE_RECORD.len() as u64));

    group.bench_function("valid_record", |b| {
        b.iter(|| black_box(reformat(black_box(SAMPLE_RECORD))));
    });

    group.bench_function("plain_text", |b| {
        b.iter(|| black_box(reformat(black_box(b"panic: runtime error: index out of range"))));
    });

    group.bench_function("bad_time", |b| {
        b.iter(|| black_box(reformat(black_box(br#"{"time":"noon","msg":"x"}"#))));
    });

    group.bench_function("writer", |b| {
        let mut writer = PrettyJsonWriter::new(io::sink());
        b.iter(|| {
            use std::io::Write;
            writer.write_all(black_box(SAMPLE_RECORD)).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let json = Logger::with_appender(LogLevel::Trace, JsonAppender::new(io::sink()));
    let pretty = Logger::with_appender(LogLevel::Trace, JsonAppender::pretty(io::sink()));
    let console = Logger::with_appender(
        LogLevel::Trace,
        ConsoleAppender::with_writer(io::sink()).with_colors(false),
    );

    for (name, logger) in [("json", &json), ("pretty", &pretty), ("console", &console)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                logger.log_attrs(
                    LogLevel::Info,
                    black_box("request served"),
                    [Attr::new("path", "/api/users"), Attr::new("status", 200)],
                );
            });
        });
    }

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_appender(LogLevel::Error, JsonAppender::new(io::sink()));

    group.bench_function("filtered_out", |b| {
        b.iter(|| logger.debug(black_box("not written")));
    });

    group.bench_function("written", |b| {
        b.iter(|| logger.error(black_box("written")));
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2, 4] {
        group.throughput(Throughput::Elements(threads as u64 * 100));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let logger = Arc::new(Logger::with_appender(
                LogLevel::Info,
                JsonAppender::new(io::sink()),
            ));

            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(format!("message {}", i));
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Legacy Adapter Benchmarks
// ============================================================================

fn bench_legacy(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_adapter");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_appender(LogLevel::Info, JsonAppender::new(io::sink()));
    let identity = LegacyLogger::new(Some(logger.clone()));
    let key_value = LegacyLogger::builder(Some(logger))
        .extractor(KeyValueExtractor)
        .build();
    let silent = LegacyLogger::new(None);

    group.bench_function("printf_identity", |b| {
        b.iter(|| identity.printf(format_args!("served {} in {}ms", black_box("/"), 12)));
    });

    group.bench_function("printf_key_value", |b| {
        b.iter(|| key_value.printf(format_args!("served path={} ms={}", black_box("/"), 12)));
    });

    group.bench_function("println_no_logger", |b| {
        b.iter(|| logshim::legacy_println!(silent, black_box("ignored"), 42));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_level_parsing,
    bench_reformat,
    bench_sync_logging,
    bench_level_filtering,
    bench_concurrent_logging,
    bench_legacy
);

criterion_main!(benches);
