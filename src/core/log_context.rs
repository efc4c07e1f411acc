//! Per-call context passed alongside every entry
//!
//! A `LogContext` carries request-scoped collaborators down to loggers
//! without widening the `Logger` trait. Values are keyed by their type, so
//! each adapter defines its own private key type.
//!
//! A context may also carry a deadline. Loggers never consult it: logging is
//! always attempted to completion.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

type ValueMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Immutable, cheaply clonable bag of typed values.
#[derive(Clone, Default)]
pub struct LogContext {
    values: Arc<ValueMap>,
    deadline: Option<Instant>,
}

impl LogContext {
    /// An empty context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that also carries `value`, replacing any earlier value
    /// of the same type.
    #[must_use]
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut values = ValueMap::clone(&self.values);
        values.insert(TypeId::of::<T>(), Arc::new(value));
        Self {
            values: Arc::new(values),
            deadline: self.deadline,
        }
    }

    /// Look up the value of type `T`, if any.
    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            values: Arc::clone(&self.values),
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("values", &self.values.len())
            .field("deadline", &self.deadline)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    struct RequestId(u64);

    #[derive(Debug, PartialEq)]
    struct User(&'static str);

    #[test]
    fn test_background_is_empty() {
        let ctx = LogContext::background();
        assert!(ctx.is_empty());
        assert!(ctx.value::<RequestId>().is_none());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn test_values_by_type() {
        let ctx = LogContext::background()
            .with_value(RequestId(7))
            .with_value(User("ada"));
        assert_eq!(ctx.value::<RequestId>(), Some(&RequestId(7)));
        assert_eq!(ctx.value::<User>(), Some(&User("ada")));
    }

    #[test]
    fn test_derived_context_leaves_parent_untouched() {
        let parent = LogContext::background().with_value(RequestId(1));
        let child = parent.with_value(RequestId(2));
        assert_eq!(parent.value::<RequestId>(), Some(&RequestId(1)));
        assert_eq!(child.value::<RequestId>(), Some(&RequestId(2)));
    }

    #[test]
    fn test_deadline_keeps_values() {
        let deadline = Instant::now() + Duration::from_secs(1);
        let ctx = LogContext::background()
            .with_value(RequestId(3))
            .with_deadline(deadline);
        assert_eq!(ctx.deadline(), Some(deadline));
        assert_eq!(ctx.value::<RequestId>(), Some(&RequestId(3)));
    }
}
