//! Sink trait for the backend behind the facade

use super::log_tags::LogTags;
use std::fmt::Debug;

/// Capability the facade needs from a logging backend.
///
/// A sink is shared by reference between every logger derived from the same
/// root, so implementations must tolerate concurrent `emit` calls.
///
/// Terminal levels are a property of the native level: a sink receiving its
/// fatal-equivalent level must terminate the process once the record is
/// handed over, and its panic-equivalent level must unwind the caller.
pub trait LogSink: Send + Sync {
    /// The sink's own level representation
    type Level: Copy + Debug;

    /// Map a canonical level name (see `LogLevel::name`) onto a native level.
    ///
    /// Returns `None` for names the sink does not recognize.
    fn resolve_level(&self, name: &str) -> Option<Self::Level>;

    /// Level used for the facade's own diagnostics
    fn error_level(&self) -> Self::Level;

    /// Record one entry. Synchronous; `tags` may be empty.
    fn emit(&self, level: Self::Level, tags: &LogTags, message: &str);
}
