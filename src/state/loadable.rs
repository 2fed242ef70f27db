//! Explicit async-task phases.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

/// Lifecycle of one remote operation, carried explicitly in state instead
/// of loose `loading`/`error` flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    /// No request issued yet (or state was cleared).
    #[default]
    Idle,
    /// Request in flight; readers show a spinner.
    Pending,
    /// Request settled successfully.
    Fulfilled(T),
    /// Request settled with a normalized error message.
    Rejected(String),
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// Drop a settled error, keeping any other phase.
    pub fn clear_error(&mut self) {
        if matches!(self, Self::Rejected(_)) {
            *self = Self::Idle;
        }
    }
}
