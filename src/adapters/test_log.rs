//! Route log entries to the test that produced them
//!
//! Attach a [`TestSink`] to the context a test passes down with
//! [`with_test_sink`] and install a [`TestLogger`] as the process default.
//! Entries logged under that context land in the test's sink; everything else
//! goes to the fallback.
//!
//! ```
//! use linelog::adapters::test_log::{with_test_sink, CaptureSink, TestLogger};
//! use linelog::{warn, LogContext};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let ctx = with_test_sink(&LogContext::background(), sink.clone());
//!
//! let logger = TestLogger::new(None);
//! warn!(ctx: &ctx, logger, "retrying in {}s", 5);
//!
//! assert_eq!(sink.lines(), vec!["WARN: retrying in 5s"]);
//! ```

use crate::core::{set_default, try_set_default, Entry, Level, LogContext, Logger, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Where a test wants its log lines.
pub trait TestSink: Send + Sync {
    fn log_line(&self, line: &str);
}

impl<F> TestSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log_line(&self, line: &str) {
        self(line)
    }
}

/// Context key for the sink.
#[derive(Clone)]
struct SinkSlot(Arc<dyn TestSink>);

/// Derive a context that sends [`TestLogger`] output to `sink`.
pub fn with_test_sink(parent: &LogContext, sink: Arc<dyn TestSink>) -> LogContext {
    parent.with_value(SinkSlot(sink))
}

/// Writes to the [`TestSink`] carried by the context, or to `fallback`.
#[derive(Clone, Default)]
pub struct TestLogger {
    /// Used when the context carries no sink. `None` discards.
    pub fallback: Option<Arc<dyn Logger>>,
}

impl TestLogger {
    pub fn new(fallback: Option<Arc<dyn Logger>>) -> Self {
        Self { fallback }
    }

    /// Make a `TestLogger` the process default. Call it once per test
    /// binary, before any test logs.
    ///
    /// # Panics
    ///
    /// Panics if a default logger has already been set.
    #[track_caller]
    pub fn install(fallback: Option<Arc<dyn Logger>>) {
        set_default(Arc::new(Self::new(fallback)));
    }

    /// Like [`install`](Self::install), but an existing default is reported
    /// as [`LoggerError::DefaultAlreadySet`](crate::LoggerError::DefaultAlreadySet).
    pub fn try_install(fallback: Option<Arc<dyn Logger>>) -> Result<()> {
        try_set_default(Some(Arc::new(Self::new(fallback))))
    }

    fn render(entry: &Entry) -> String {
        let msg = entry.msg.strip_suffix('\n').unwrap_or(&entry.msg);
        match entry.level {
            Level::WARN => format!("WARN: {}", msg),
            Level::ERROR => format!("ERROR: {}", msg),
            _ => msg.to_string(),
        }
    }
}

impl Logger for TestLogger {
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        match ctx.value::<SinkSlot>() {
            Some(SinkSlot(sink)) => sink.log_line(&Self::render(entry)),
            None => {
                if let Some(ref fallback) = self.fallback {
                    fallback.log(ctx, entry);
                }
            }
        }
    }

    /// Always true; filtering is left to the fallback.
    fn log_enabled(&self, _entry: &Entry) -> bool {
        true
    }
}

impl fmt::Debug for TestLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestLogger")
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// Keeps every line for later assertions.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Return the lines captured so far and start over.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl TestSink for CaptureSink {
    fn log_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Prints through the test harness's captured stdout, so lines show up only
/// for failing tests or under `--nocapture`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintSink;

impl TestSink for PrintSink {
    fn log_line(&self, line: &str) {
        println!("{}", line);
    }
}
