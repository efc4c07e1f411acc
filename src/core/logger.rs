//! The logger capability

use super::{log_context::LogContext, log_entry::Entry};
use std::sync::Arc;

/// Anything that accepts log entries.
///
/// `log` sends an entry to the underlying sink. Entries from one caller reach
/// the sink in the order `log` was called, but `log` does not wait for the
/// sink to acknowledge delivery, and it ignores any deadline carried by the
/// context. `log` must be safe to call from many threads at once.
///
/// `log_enabled` returns false if `log` would drop the entry. It may be
/// called with an entry whose message has not been filled in yet, has no
/// side effects, and never calls `log`.
pub trait Logger: Send + Sync {
    fn log(&self, ctx: &LogContext, entry: &Entry);

    fn log_enabled(&self, entry: &Entry) -> bool;
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        (**self).log(ctx, entry)
    }

    fn log_enabled(&self, entry: &Entry) -> bool {
        (**self).log_enabled(entry)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        (**self).log(ctx, entry)
    }

    fn log_enabled(&self, entry: &Entry) -> bool {
        (**self).log_enabled(entry)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, ctx: &LogContext, entry: &Entry) {
        (**self).log(ctx, entry)
    }

    fn log_enabled(&self, entry: &Entry) -> bool {
        (**self).log_enabled(entry)
    }
}

/// The no-op logger. Every entry is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Logger for Discard {
    #[inline]
    fn log(&self, _ctx: &LogContext, _entry: &Entry) {}

    #[inline]
    fn log_enabled(&self, _entry: &Entry) -> bool {
        false
    }
}
