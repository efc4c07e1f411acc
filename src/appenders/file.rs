//! File appender implementation

use super::writer::{ErrorCallback, WriterAppender};
use crate::core::{Entry, Flags, LogContext, Logger, LoggerError, Result, SinkMetrics};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// A [`WriterAppender`] over a file opened for appending.
///
/// Lines go straight to the file with one write each; nothing is buffered in
/// the process.
#[derive(Debug)]
pub struct FileAppender {
    path: PathBuf,
    inner: WriterAppender<File>,
}

impl FileAppender {
    /// Open (creating if needed) `path` for appending.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use linelog::{FileAppender, Flags};
    ///
    /// let appender = FileAppender::new("/var/log/app.log", "", Flags::STD | Flags::UTC)
    ///     .unwrap();
    /// ```
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>, flags: Flags) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            inner: WriterAppender::new(file, prefix, flags),
        })
    }

    #[must_use]
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.inner = self.inner.with_error_callback(callback);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metrics(&self) -> &SinkMetrics {
        self.inner.metrics()
    }
}

impl Logger for FileAppender {
    #[inline]
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        self.inner.log(ctx, entry);
    }

    #[inline]
    fn log_enabled(&self, entry: &Entry) -> bool {
        self.inner.log_enabled(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_appends_lines() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("app.log");
        fs::write(&log_file, "existing\n").expect("Failed to seed log file");

        let appender = FileAppender::new(&log_file, "", Flags::SHOW_LEVEL).expect("Failed to open");
        let ctx = LogContext::background();
        appender.log(&ctx, &Entry::new(Level::WARN, "first"));
        appender.log(&ctx, &Entry::new(Level::ERROR, "second\n"));

        let content = fs::read_to_string(&log_file).expect("Failed to read log file");
        assert_eq!(content, "existing\nWARN: first\nERROR: second\n");
        assert_eq!(appender.metrics().lines_written(), 2);
        assert_eq!(appender.path(), log_file.as_path());
    }

    #[test]
    fn test_open_failure_has_context() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("no/such/dir/app.log");

        let err = FileAppender::new(&missing, "", Flags::STD).expect_err("open should fail");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
