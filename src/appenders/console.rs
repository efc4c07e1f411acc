//! Console appender implementation

use super::writer::{ErrorCallback, WriterAppender};
use crate::core::{Entry, Flags, LogContext, Logger, SinkMetrics};
use std::io::{self, Write};

/// Which standard stream a [`ConsoleAppender`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    Stdout,
    #[default]
    Stderr,
}

impl Write for ConsoleStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ConsoleStream::Stdout => io::stdout().write(buf),
            ConsoleStream::Stderr => io::stderr().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        // Hold the std lock for the whole line.
        match self {
            ConsoleStream::Stdout => io::stdout().lock().write_all(buf),
            ConsoleStream::Stderr => io::stderr().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ConsoleStream::Stdout => io::stdout().flush(),
            ConsoleStream::Stderr => io::stderr().flush(),
        }
    }
}

/// A [`WriterAppender`] over stdout or stderr.
#[derive(Debug)]
pub struct ConsoleAppender {
    inner: WriterAppender<ConsoleStream>,
}

impl ConsoleAppender {
    pub fn new(stream: ConsoleStream, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            inner: WriterAppender::new(stream, prefix, flags),
        }
    }

    pub fn stderr(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::new(ConsoleStream::Stderr, prefix, flags)
    }

    pub fn stdout(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::new(ConsoleStream::Stdout, prefix, flags)
    }

    #[must_use]
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.inner = self.inner.with_error_callback(callback);
        self
    }

    /// Colour each line by level.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelog::{ConsoleAppender, Flags};
    ///
    /// let appender = ConsoleAppender::stderr("", Flags::STD).with_colors(true);
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.inner = self.inner.with_colors(use_colors);
        self
    }

    pub fn metrics(&self) -> &SinkMetrics {
        self.inner.metrics()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::stderr("", Flags::STD)
    }
}

impl Logger for ConsoleAppender {
    #[inline]
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        self.inner.log(ctx, entry);
    }

    #[inline]
    fn log_enabled(&self, entry: &Entry) -> bool {
        self.inner.log_enabled(entry)
    }
}
