//! Declarative logger setup
//!
//! A [`LoggerConfig`] is the serializable description of a logger and a
//! [`LoggerBuilder`] the fluent one. Both produce an `Arc<dyn Logger>`: a
//! sink for the chosen target, wrapped in a [`LevelFilter`] when a minimum
//! level is configured.
//!
//! ```json
//! {
//!     "prefix": "api: ",
//!     "flags": "Std|ShortFile",
//!     "min_level": "warn",
//!     "target": { "file": "/var/log/api.log" }
//! }
//! ```

use super::{
    default_logger::{set_default, try_set_default},
    error::{LoggerError, Result},
    flags::Flags,
    level_filter::LevelFilter,
    log_level::Level,
    logger::Logger,
};
use crate::appenders::{ConsoleAppender, ConsoleStream, ErrorCallback, FileAppender, WriterAppender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where lines are written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stderr,
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub prefix: String,
    pub flags: Flags,
    /// Entries below this level are dropped. `None` keeps everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_level: Option<Level>,
    pub target: Target,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            flags: Flags::STD,
            min_level: None,
            target: Target::Stderr,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<Arc<dyn Logger>> {
        LoggerBuilder::from(self.clone()).build()
    }
}

/// Fluent construction of a logger.
///
/// # Example
///
/// ```
/// use linelog::{Flags, Level, LoggerBuilder};
///
/// let logger = LoggerBuilder::new()
///     .prefix("worker: ")
///     .flags(Flags::STD | Flags::SHORT_FILE)
///     .min_level(Level::WARN)
///     .writer(Vec::new())
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    on_error: Option<ErrorCallback>,
    colors: bool,
    writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.config.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.config.min_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn target(mut self, target: Target) -> Self {
        self.config.target = target;
        self
    }

    /// Write to `path`, appending.
    #[must_use = "builder methods return a new value"]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.target(Target::File(path.into()))
    }

    /// Write to an arbitrary destination instead of the configured target.
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Colour console output by level. Only valid for stdout and stderr.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn build(self) -> Result<Arc<dyn Logger>> {
        let LoggerBuilder {
            config,
            on_error,
            colors,
            writer,
        } = self;
        let LoggerConfig {
            prefix,
            flags,
            min_level,
            target,
        } = config;

        if colors && (writer.is_some() || matches!(target, Target::File(_))) {
            return Err(LoggerError::config(
                "colors",
                "colors only apply to stdout and stderr",
            ));
        }

        let sink: Arc<dyn Logger> = match (writer, target) {
            (Some(out), _) => {
                let mut appender = WriterAppender::new(out, prefix, flags);
                if let Some(callback) = on_error {
                    appender = appender.with_error_callback(callback);
                }
                Arc::new(appender)
            }
            (None, Target::File(path)) => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("target", "file path is empty"));
                }
                let mut appender = FileAppender::new(path, prefix, flags)?;
                if let Some(callback) = on_error {
                    appender = appender.with_error_callback(callback);
                }
                Arc::new(appender)
            }
            (None, console) => {
                let stream = match console {
                    Target::Stdout => ConsoleStream::Stdout,
                    _ => ConsoleStream::Stderr,
                };
                let mut appender = ConsoleAppender::new(stream, prefix, flags);
                if let Some(callback) = on_error {
                    appender = appender.with_error_callback(callback);
                }
                Arc::new(with_console_colors(appender, colors))
            }
        };

        Ok(match min_level {
            Some(min) => Arc::new(LevelFilter::new(min, sink)),
            None => sink,
        })
    }

    /// Build the logger and make it the process default.
    ///
    /// Build errors are returned.
    ///
    /// # Panics
    ///
    /// Panics if a default logger has already been set.
    #[track_caller]
    pub fn install(self) -> Result<Arc<dyn Logger>> {
        let logger = self.build()?;
        set_default(Arc::clone(&logger));
        Ok(logger)
    }

    /// Like [`install`](Self::install), but an existing default is reported
    /// as [`LoggerError::DefaultAlreadySet`].
    pub fn try_install(self) -> Result<Arc<dyn Logger>> {
        let logger = self.build()?;
        try_set_default(Some(Arc::clone(&logger)))?;
        Ok(logger)
    }
}

#[cfg(feature = "console")]
fn with_console_colors(appender: ConsoleAppender, colors: bool) -> ConsoleAppender {
    appender.with_colors(colors)
}

#[cfg(not(feature = "console"))]
fn with_console_colors(appender: ConsoleAppender, _colors: bool) -> ConsoleAppender {
    appender
}

impl From<LoggerConfig> for LoggerBuilder {
    fn from(config: LoggerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("on_error", &self.on_error.is_some())
            .field("colors", &self.colors)
            .field("writer", &self.writer.is_some())
            .finish()
    }
}
