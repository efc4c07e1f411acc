//! Criterion benchmarks for linelog

use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linelog::adapters::line_parser::parse_line;
use linelog::prelude::*;
use linelog::info;
use std::io;

fn sample_entry() -> Entry {
    Entry::new(Level::INFO, "Request processed successfully")
        .with_time(DateTime::parse_from_rfc3339("2017-02-17T01:02:03.456789Z").unwrap())
        .with_location("src/server/handlers.rs", 278)
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(1));
    let entry = sample_entry();
    let mut buf = String::with_capacity(256);

    for (name, flags) in [
        ("bare", Flags::empty()),
        ("std", Flags::STD),
        ("std_short_file", Flags::STD | Flags::SHORT_FILE),
        ("parseable", Flags::PARSEABLE),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                buf.clear();
                black_box(&entry).append_to(&mut buf, black_box(flags));
                black_box(buf.len())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Sink Benchmarks
// ============================================================================

fn bench_sinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sinks");
    group.throughput(Throughput::Elements(1));
    let ctx = LogContext::background();
    let entry = sample_entry();

    let writer = WriterAppender::new(io::sink(), "app: ", Flags::STD | Flags::SHORT_FILE);
    group.bench_function("writer_io_sink", |b| {
        b.iter(|| writer.log(&ctx, black_box(&entry)));
    });

    group.bench_function("discard", |b| {
        b.iter(|| Discard.log(&ctx, black_box(&entry)));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let filtered = LevelFilter::new(
        Level::WARN,
        WriterAppender::new(io::sink(), "", Flags::STD),
    );

    group.bench_function("macro_below_min", |b| {
        b.iter(|| info!(filtered, "value {}", black_box(42)));
    });

    group.bench_function("macro_above_min", |b| {
        b.iter(|| linelog::error!(filtered, "value {}", black_box(42)));
    });

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let line = sample_entry().format(Flags::PARSEABLE);
    c.bench_function("parse_line", |b| {
        b.iter(|| parse_line(black_box(&line), Level::INFO).unwrap());
    });
}

criterion_group!(benches, bench_format, bench_sinks, bench_filtering, bench_parse);
criterion_main!(benches);
