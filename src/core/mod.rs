//! Core logger types and traits

pub mod config;
pub mod default_logger;
pub mod error;
pub mod flags;
pub(crate) mod format;
pub mod level_filter;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;

pub use config::{LoggerBuilder, LoggerConfig, Target};
pub use default_logger::{
    default_logger, set_default, try_set_default, DefaultLogger, FALLBACK_MIN_LEVEL,
};
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use level_filter::LevelFilter;
pub use log_context::LogContext;
pub use log_entry::Entry;
pub use log_level::Level;
pub use logger::{Discard, Logger};
pub use metrics::SinkMetrics;
