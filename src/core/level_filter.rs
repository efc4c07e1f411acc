//! Severity filtering decorator

use super::{log_context::LogContext, log_entry::Entry, log_level::Level, logger::Logger};

/// Drops entries below a minimum level before they reach `output`.
///
/// Filters compose: `output` may be a sink, another filter, or any other
/// logger. An entry rejected here causes no call on `output` at all.
///
/// ```
/// use linelog::{Discard, Entry, Level, LevelFilter, Logger};
///
/// let filter = LevelFilter::new(Level::WARN, Discard);
/// assert!(!filter.log_enabled(&Entry::new(Level::INFO, "")));
/// ```
#[derive(Debug, Clone)]
pub struct LevelFilter<L> {
    pub min: Level,
    pub output: L,
}

impl<L: Logger> LevelFilter<L> {
    pub fn new(min: Level, output: L) -> Self {
        Self { min, output }
    }

    pub fn into_inner(self) -> L {
        self.output
    }
}

impl<L: Logger> Logger for LevelFilter<L> {
    /// Forwards the entry unchanged if its level is at least `min`.
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        if entry.level < self.min {
            return;
        }
        self.output.log(ctx, entry);
    }

    /// False below `min`, otherwise whatever `output` says.
    fn log_enabled(&self, entry: &Entry) -> bool {
        if entry.level < self.min {
            return false;
        }
        self.output.log_enabled(entry)
    }
}
