//! Error types for Actionbar core.

use std::fmt;
use std::thread::ThreadId;

/// The main error type for core operations.
#[derive(Debug)]
pub enum CoreError {
    /// Signal-related error.
    Signal(SignalError),
    /// Thread affinity violation.
    ThreadAffinity(ThreadAffinityError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(err) => write!(f, "Signal error: {err}"),
            Self::ThreadAffinity(err) => write!(f, "Thread affinity error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signal(err) => Some(err),
            Self::ThreadAffinity(err) => Some(err),
        }
    }
}

impl From<SignalError> for CoreError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}

impl From<ThreadAffinityError> for CoreError {
    fn from(err: ThreadAffinityError) -> Self {
        Self::ThreadAffinity(err)
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Errors reported by [`ThreadAffinity::check`](crate::ThreadAffinity::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadAffinityError {
    /// The object was accessed from a thread other than the one that created it.
    WrongThread {
        /// Thread the object is bound to.
        expected: ThreadId,
        /// Thread the access came from.
        actual: ThreadId,
    },
}

impl fmt::Display for ThreadAffinityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongThread { expected, actual } => write!(
                f,
                "Object bound to thread {expected:?} was accessed from thread {actual:?}"
            ),
        }
    }
}

impl std::error::Error for ThreadAffinityError {}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_signal_error_converts_and_chains() {
        let err: CoreError = SignalError::InvalidConnection.into();
        assert_eq!(
            err.to_string(),
            "Signal error: Invalid or disconnected connection ID"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_thread_affinity_error_display() {
        let id = std::thread::current().id();
        let err = ThreadAffinityError::WrongThread {
            expected: id,
            actual: id,
        };
        assert!(err.to_string().contains("was accessed from thread"));
    }
}
