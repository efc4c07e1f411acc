//! Line-oriented sink over any `io::Write`

use crate::core::{Entry, Flags, LogContext, Logger, SinkMetrics};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Called with the call's context when the destination rejects a write.
///
/// It runs while the sink is locked, so it must be quick and must not log to
/// the same sink.
pub type ErrorCallback = Arc<dyn Fn(&LogContext, &io::Error) + Send + Sync>;

/// Writes one line per entry to a destination.
///
/// Each `log` call makes a single `write_all` of a fully built line while
/// holding the sink's lock, so lines from concurrent callers never interleave.
/// `log_enabled` always returns true.
///
/// # Example
///
/// ```
/// use linelog::{Entry, Flags, Level, LogContext, Logger, WriterAppender};
///
/// let sink = WriterAppender::new(Vec::new(), "app: ", Flags::SHOW_LEVEL);
/// sink.log(&LogContext::background(), &Entry::new(Level::WARN, "low disk"));
/// assert_eq!(sink.into_inner(), b"app: WARN: low disk\n");
/// ```
pub struct WriterAppender<W> {
    prefix: String,
    flags: Flags,
    on_error: Option<ErrorCallback>,
    #[cfg(feature = "console")]
    use_colors: bool,
    metrics: SinkMetrics,
    state: Mutex<WriterState<W>>,
}

struct WriterState<W> {
    out: W,
    /// Reused across calls to bound allocation.
    buf: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(out: W, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            on_error: None,
            #[cfg(feature = "console")]
            use_colors: false,
            metrics: SinkMetrics::new(),
            state: Mutex::new(WriterState {
                out,
                buf: String::with_capacity(256),
            }),
        }
    }

    /// Report destination errors to `callback`.
    ///
    /// Without a callback the first failure is reported on stderr and every
    /// failure is counted in [`metrics`](Self::metrics).
    #[must_use]
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Colour each line by level. Off by default.
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    /// Consume the sink and return its destination.
    pub fn into_inner(self) -> W {
        self.state.into_inner().out
    }

    fn build_line(&self, buf: &mut String, entry: &Entry) {
        buf.clear();
        buf.push_str(&self.prefix);
        if self.colorize() {
            self.push_colored(buf, entry);
        } else {
            entry.append_to(buf, self.flags);
        }
        buf.push('\n');
    }

    #[cfg(feature = "console")]
    fn colorize(&self) -> bool {
        self.use_colors
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self) -> bool {
        false
    }

    #[cfg(feature = "console")]
    fn push_colored(&self, buf: &mut String, entry: &Entry) {
        use colored::Colorize;
        use std::fmt::Write as _;
        let body = entry.format(self.flags);
        // Writing into a String cannot fail.
        let _ = write!(buf, "{}", body.color(entry.level.color_code()));
    }

    #[cfg(not(feature = "console"))]
    fn push_colored(&self, buf: &mut String, entry: &Entry) {
        entry.append_to(buf, self.flags);
    }

    fn report(&self, ctx: &LogContext, err: &io::Error) {
        let previous = self.metrics.record_failed();
        match self.on_error {
            Some(ref callback) => callback(ctx, err),
            None if previous == 0 => report_failure(&mut io::stderr().lock(), err),
            None => {}
        }
    }
}

/// One-time notice for a sink without an error callback. A notice that cannot
/// be written is dropped so `log` never panics.
fn report_failure(out: &mut dyn Write, err: &io::Error) {
    let _ = writeln!(out, "[LOGGER ERROR] write failed: {}", err);
}

impl<W: Write + Send> Logger for WriterAppender<W> {
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        let mut guard = self.state.lock();
        let WriterState { out, buf } = &mut *guard;
        self.build_line(buf, entry);
        match out.write_all(buf.as_bytes()) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(err) => self.report(ctx, &err),
        }
    }

    #[inline]
    fn log_enabled(&self, _entry: &Entry) -> bool {
        true
    }
}

impl<W> fmt::Debug for WriterAppender<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterAppender")
            .field("prefix", &self.prefix)
            .field("flags", &format_args!("{}", self.flags))
            .field("on_error", &self.on_error.is_some())
            .field("metrics", &self.metrics)
            .finish()
    }
}
