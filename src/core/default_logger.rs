//! Process-wide default logger
//!
//! Call sites that have no logger threaded through to them use
//! [`default_logger()`]. Until [`set_default`] is called it sends entries at
//! [`FALLBACK_MIN_LEVEL`] and above to stderr with [`Flags::STD`]. The
//! default may be assigned exactly once, normally at the top of `main`;
//! assigning it twice is a bug in initialization order and panics.

use super::{
    error::{LoggerError, Result},
    flags::Flags,
    level_filter::LevelFilter,
    log_context::LogContext,
    log_entry::Entry,
    log_level::Level,
    logger::Logger,
};
use crate::appenders::ConsoleAppender;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Entries below this level are dropped by the fallback logger.
pub const FALLBACK_MIN_LEVEL: Level = Level::INFO;

static DEFAULT: DefaultLogger = DefaultLogger::new();

/// A set-once logger slot with a fallback.
///
/// Reads are a single atomic load. The slot itself is a [`Logger`] that
/// forwards to whatever it currently holds, so a handle taken before
/// assignment routes to the assigned logger afterwards.
pub struct DefaultLogger {
    slot: OnceLock<Arc<dyn Logger>>,
    fallback: OnceLock<Arc<dyn Logger>>,
}

impl DefaultLogger {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            fallback: OnceLock::new(),
        }
    }

    /// The assigned logger, or the fallback if none has been assigned.
    pub fn get(&self) -> &dyn Logger {
        match self.slot.get() {
            Some(logger) => logger.as_ref(),
            None => self.fallback(),
        }
    }

    pub fn is_set(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Assign the logger.
    ///
    /// A `None` logger is rejected before the slot is touched, so a later
    /// valid assignment still succeeds. Once a logger has been stored every
    /// further call fails; concurrent callers race for a single winner.
    pub fn try_set(&self, logger: Option<Arc<dyn Logger>>) -> Result<()> {
        let logger = logger.ok_or(LoggerError::NilLogger)?;
        self.slot
            .set(logger)
            .map_err(|_| LoggerError::DefaultAlreadySet)
    }

    /// Like [`try_set`](Self::try_set), but misuse panics.
    #[track_caller]
    pub fn set(&self, logger: Option<Arc<dyn Logger>>) {
        if let Err(err) = self.try_set(logger) {
            panic!("linelog: {}", err);
        }
    }

    fn fallback(&self) -> &dyn Logger {
        self.fallback
            .get_or_init(|| {
                Arc::new(LevelFilter::new(
                    FALLBACK_MIN_LEVEL,
                    ConsoleAppender::stderr("", Flags::STD),
                ))
            })
            .as_ref()
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    #[inline]
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        self.get().log(ctx, entry);
    }

    #[inline]
    fn log_enabled(&self, entry: &Entry) -> bool {
        self.get().log_enabled(entry)
    }
}

impl fmt::Debug for DefaultLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLogger")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// The process-wide logger.
///
/// # Example
///
/// ```
/// use linelog::{default_logger, Entry, Level, LogContext, Logger};
///
/// let logger = default_logger();
/// let entry = Entry::new(Level::DEBUG, "suppressed by the fallback");
/// if logger.log_enabled(&entry) {
///     logger.log(&LogContext::background(), &entry);
/// }
/// ```
pub fn default_logger() -> &'static DefaultLogger {
    &DEFAULT
}

/// Set the process-wide logger. It can only be called once.
///
/// # Panics
///
/// Panics if a default logger has already been set.
#[track_caller]
pub fn set_default(logger: Arc<dyn Logger>) {
    DEFAULT.set(Some(logger));
}

/// Set the process-wide logger, reporting misuse as an error.
pub fn try_set_default(logger: Option<Arc<dyn Logger>>) -> Result<()> {
    DEFAULT.try_set(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logger::testing::CaptureLogger;
    use crate::core::logger::Discard;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::thread;

    #[test]
    fn test_fallback_filters_below_info() {
        let holder = DefaultLogger::new();
        assert!(!holder.is_set());
        assert!(!holder.log_enabled(&Entry::new(Level::DEBUG, "")));
        assert!(holder.log_enabled(&Entry::new(Level::INFO, "")));
        assert!(holder.log_enabled(&Entry::new(Level::ERROR, "")));
    }

    #[test]
    fn test_first_set_wins() {
        let holder = DefaultLogger::new();
        let capture = Arc::new(CaptureLogger::default());
        holder.set(Some(capture.clone() as Arc<dyn Logger>));

        assert!(holder.is_set());
        let entry = Entry::new(Level::DEBUG, "routed");
        assert!(holder.log_enabled(&entry));
        holder.log(&LogContext::background(), &entry);
        assert_eq!(capture.logged(), vec![entry]);
    }

    #[test]
    fn test_second_set_fails() {
        let holder = DefaultLogger::new();
        let logger: Arc<dyn Logger> = Arc::new(Discard);
        holder.try_set(Some(Arc::clone(&logger))).expect("first set");

        assert!(matches!(
            holder.try_set(Some(Arc::clone(&logger))),
            Err(LoggerError::DefaultAlreadySet)
        ));
        let result = catch_unwind(AssertUnwindSafe(|| holder.set(Some(Arc::new(Discard)))));
        assert!(result.is_err(), "second set must panic");
    }

    #[test]
    fn test_nil_set_leaves_slot_untouched() {
        let holder = DefaultLogger::new();
        assert!(matches!(holder.try_set(None), Err(LoggerError::NilLogger)));
        let result = catch_unwind(AssertUnwindSafe(|| holder.set(None)));
        assert!(result.is_err(), "nil set must panic");
        assert!(!holder.is_set());

        holder.try_set(Some(Arc::new(Discard))).expect("valid set after nil");
        assert!(!holder.log_enabled(&Entry::new(Level::ERROR, "")));
    }

    #[test]
    fn test_concurrent_set_has_one_winner() {
        let holder = &DefaultLogger::new();
        let winners: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    s.spawn(move || {
                        let logger: Arc<dyn Logger> = Arc::new(CaptureLogger::default());
                        holder.try_set(Some(logger)).is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("setter thread panicked") as usize)
                .sum()
        });
        assert_eq!(winners, 1);
    }

    #[test]
    fn test_reads_before_and_during_set() {
        let holder = &DefaultLogger::new();
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(move || {
                    for _ in 0..1000 {
                        let _ = holder.log_enabled(&Entry::new(Level::DEBUG, ""));
                    }
                });
            }
            s.spawn(move || holder.set(Some(Arc::new(Discard))));
        });
        assert!(holder.is_set());
    }
}
