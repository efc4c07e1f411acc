//! Logging macros for ergonomic log message formatting.
//!
//! Every macro builds an [`Entry`](crate::Entry) stamped with the call site,
//! asks the logger whether it wants it, and only then formats the message.
//! Arguments are not evaluated when the logger declines the entry.
//!
//! # Examples
//!
//! ```
//! use linelog::{info, warn, Flags, LogContext, WriterAppender};
//!
//! let logger = WriterAppender::new(Vec::new(), "", Flags::SHOW_LEVEL);
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! let ctx = LogContext::background();
//! warn!(ctx: &ctx, logger, "slow request: {}ms", 1200);
//!
//! assert_eq!(
//!     logger.into_inner(),
//!     b"INFO: Server started\nINFO: Server listening on port 8080\nWARN: slow request: 1200ms\n"
//! );
//! ```
//!
//! Without a logger argument the macros write to
//! [`default_logger()`](crate::default_logger):
//!
//! ```
//! linelog::error!("disk {} is full", "/dev/sda1");
//! ```

#[doc(hidden)]
pub mod __private {
    /// Drop a single trailing newline.
    #[inline]
    pub fn trim_newline(mut msg: String) -> String {
        if msg.ends_with('\n') {
            msg.pop();
        }
        msg
    }
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// use linelog::{log, Discard, Level, LogContext};
///
/// log!(Discard, Level::INFO, "Simple message");
/// log!(Discard, Level::ERROR, "Error code: {}", 500);
/// log!(ctx: &LogContext::background(), Discard, Level::new(15), "custom level");
/// ```
#[macro_export]
macro_rules! log {
    (ctx: $ctx:expr, $logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let mut entry = $crate::Entry::new($level, ::std::string::String::new());
        if $crate::Logger::log_enabled(logger, &entry) {
            entry.msg = $crate::macros::__private::trim_newline(::std::format!($($arg)+));
            $crate::Logger::log(logger, $ctx, &entry);
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!(ctx: &$crate::LogContext::background(), $logger, $level, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// ```
/// use linelog::{debug, Discard};
///
/// debug!(Discard, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Level::DEBUG, $fmt $($arg)*)
    };
    (ctx: $ctx:expr, $logger:expr, $($arg:tt)+) => {
        $crate::log!(ctx: $ctx, $logger, $crate::Level::DEBUG, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Level::INFO, $fmt $($arg)*)
    };
    (ctx: $ctx:expr, $logger:expr, $($arg:tt)+) => {
        $crate::log!(ctx: $ctx, $logger, $crate::Level::INFO, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Level::WARN, $fmt $($arg)*)
    };
    (ctx: $ctx:expr, $logger:expr, $($arg:tt)+) => {
        $crate::log!(ctx: $ctx, $logger, $crate::Level::WARN, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARN, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// use linelog::{error, Discard};
///
/// let code = 503;
/// error!(Discard, "upstream returned {}", code);
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Level::ERROR, $fmt $($arg)*)
    };
    (ctx: $ctx:expr, $logger:expr, $($arg:tt)+) => {
        $crate::log!(ctx: $ctx, $logger, $crate::Level::ERROR, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}
