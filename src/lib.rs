//! # linelog
//!
//! A small leveled logging facade. Code logs through the [`Logger`] trait,
//! so libraries stay agnostic of where their output goes, and binaries pick
//! the destination once at startup.
//!
//! ## Features
//!
//! - **Deterministic lines**: [`Flags`] select a fixed-order header of date,
//!   time, level and source location in front of each message
//! - **Serialized sinks**: [`WriterAppender`] turns each entry into exactly one
//!   write, so concurrent callers never interleave partial lines
//! - **Composable**: [`LevelFilter`] wraps any logger, and adapters route
//!   entries to tests or parse text lines back into entries
//! - **Set-once default**: [`default_logger()`] writes `INFO` and above to
//!   stderr until [`set_default`] installs something else
//!
//! ## Example
//!
//! ```
//! use linelog::prelude::*;
//! use linelog::{info, warn};
//!
//! let logger = LoggerBuilder::new()
//!     .flags(Flags::SHOW_LEVEL)
//!     .min_level(Level::INFO)
//!     .writer(std::io::sink())
//!     .build()
//!     .unwrap();
//!
//! info!(logger, "listening on {}", 8080);
//! warn!(logger, "cache miss rate {:.1}%", 12.5);
//! ```

pub mod adapters;
pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, WriterAppender};
    pub use crate::core::{
        default_logger, set_default, Discard, Entry, Flags, Level, LevelFilter, LogContext,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, Result,
    };
}

pub use appenders::{ConsoleAppender, ConsoleStream, ErrorCallback, FileAppender, WriterAppender};
pub use self::core::{
    default_logger, set_default, try_set_default, DefaultLogger, Discard, Entry, Flags, Level,
    LevelFilter, LogContext, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result,
    SinkMetrics, Target, FALLBACK_MIN_LEVEL,
};
