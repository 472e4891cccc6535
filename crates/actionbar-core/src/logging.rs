//! Logging facilities for Actionbar.
//!
//! Actionbar uses the `tracing` crate for instrumentation. Libraries never
//! install a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("actionbar=trace")
//!     .init();
//! ```

/// Span names used throughout Actionbar for tracing.
pub mod span_names {
    /// Visibility reconciliation pass.
    pub const INVALIDATE: &str = "actionbar::invalidate";
    /// Signal emission span.
    pub const SIGNAL: &str = "actionbar::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "actionbar_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "actionbar_core::signal";
    /// Action container target.
    pub const CONTAINER: &str = "actionbar::container";
    /// Configuration loading target.
    pub const CONFIG: &str = "actionbar::config";
    /// Performance spans.
    pub const PERF: &str = "actionbar::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "actionbar::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with a fixed target.
#[macro_export]
macro_rules! actionbar_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "actionbar_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! actionbar_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "actionbar_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! actionbar_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "actionbar_core", $($arg)*)
    };
}
