//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from concurrent writers never interleave
//! - Each writer's lines keep their relative order
//! - Filters and the default slot behave under contention

use linelog::{
    info, DefaultLogger, Discard, Entry, FileAppender, Flags, Level, LevelFilter, LogContext,
    Logger, WriterAppender,
};
use std::collections::HashMap;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 2_000;

/// Check that every line is whole and that each thread's sequence numbers
/// appear in order.
fn assert_lines_intact(content: &str, prefix: &str) {
    let mut next: HashMap<usize, usize> = HashMap::new();
    let mut total = 0;
    for line in content.lines() {
        let body = line
            .strip_prefix(prefix)
            .unwrap_or_else(|| panic!("line missing prefix: {:?}", line));
        let (thread_part, seq_part) = body
            .split_once(' ')
            .unwrap_or_else(|| panic!("malformed line: {:?}", line));
        let thread_id: usize = thread_part
            .strip_prefix('t')
            .and_then(|t| t.parse().ok())
            .unwrap_or_else(|| panic!("bad thread id: {:?}", line));
        let seq: usize = seq_part
            .strip_prefix("seq=")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("bad sequence: {:?}", line));

        let expected = next.entry(thread_id).or_insert(0);
        assert_eq!(seq, *expected, "thread {} out of order", thread_id);
        *expected += 1;
        total += 1;
    }
    assert_eq!(total, THREADS * LINES_PER_THREAD);
    assert!(next.values().all(|&n| n == LINES_PER_THREAD));
}

#[test]
fn test_concurrent_writers_keep_lines_whole() {
    let sink = WriterAppender::new(Vec::new(), "stress| ", Flags::empty());

    thread::scope(|s| {
        for t in 0..THREADS {
            let sink = &sink;
            s.spawn(move || {
                let ctx = LogContext::background();
                for seq in 0..LINES_PER_THREAD {
                    sink.log(&ctx, &Entry::new(Level::INFO, format!("t{} seq={}", t, seq)));
                }
            });
        }
    });

    assert_eq!(
        sink.metrics().lines_written(),
        (THREADS * LINES_PER_THREAD) as u64
    );
    let content = String::from_utf8(sink.into_inner()).expect("utf-8 output");
    assert_lines_intact(&content, "stress| ");
}

#[test]
fn test_concurrent_file_appends() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let appender = Arc::new(FileAppender::new(&log_file, "", Flags::empty()).expect("Failed to open"));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let appender = Arc::clone(&appender);
            thread::spawn(move || {
                for seq in 0..LINES_PER_THREAD {
                    info!(appender, "t{} seq={}", t, seq);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    assert_eq!(appender.metrics().write_failures(), 0);
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_lines_intact(&content, "");
}

#[test]
fn test_single_writer_preserves_order() {
    let sink = WriterAppender::new(Vec::new(), "", Flags::empty());
    let ctx = LogContext::background();
    for i in 0..10_000 {
        sink.log(&ctx, &Entry::new(Level::DEBUG, i.to_string()));
    }
    let content = String::from_utf8(sink.into_inner()).expect("utf-8 output");
    for (i, line) in content.lines().enumerate() {
        assert_eq!(line, i.to_string());
    }
}

struct Counting {
    logged: AtomicUsize,
}

impl Logger for Counting {
    fn log(&self, _ctx: &LogContext, _entry: &Entry) {
        self.logged.fetch_add(1, Ordering::Relaxed);
    }

    fn log_enabled(&self, _entry: &Entry) -> bool {
        true
    }
}

#[test]
fn test_filter_under_contention() {
    let filter = LevelFilter::new(
        Level::WARN,
        Counting {
            logged: AtomicUsize::new(0),
        },
    );
    let levels = [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR];

    thread::scope(|s| {
        for _ in 0..THREADS {
            let filter = &filter;
            s.spawn(move || {
                let ctx = LogContext::background();
                for i in 0..LINES_PER_THREAD {
                    let entry = Entry::new(levels[i % levels.len()], "");
                    if filter.log_enabled(&entry) {
                        filter.log(&ctx, &entry);
                    }
                }
            });
        }
    });

    assert_eq!(
        filter.output.logged.load(Ordering::Relaxed),
        THREADS * LINES_PER_THREAD / 2
    );
}

#[test]
fn test_default_slot_race_while_logging() {
    let slot = &DefaultLogger::new();
    let winners = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..LINES_PER_THREAD {
                    // Below the fallback threshold, so nothing reaches stderr.
                    let entry = Entry::new(Level::DEBUG, "");
                    if slot.log_enabled(&entry) {
                        slot.log(&LogContext::background(), &entry);
                    }
                }
            });
            s.spawn(|| {
                if slot.try_set(Some(Arc::new(Discard))).is_ok() {
                    winners.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(winners.load(Ordering::SeqCst), 1);
    assert!(slot.is_set());
    assert!(!slot.log_enabled(&Entry::new(Level::ERROR, "")));
}
