//! The facade interface callers log through

use super::log_level::LogLevel;
use super::log_tags::{AppComponent, LogTags};
use std::fmt;

/// Structured logging with graded severities and contextual tags.
///
/// Implementors provide the three derivations and [`log_with_tags_fmt`];
/// every other operation forwards to it. Derivations never modify the
/// receiver, they return a new logger with one field replaced.
///
/// The logging operations are object safe, so code that only logs can take
/// a `&dyn StructuredLogger`.
///
/// [`log_with_tags_fmt`]: StructuredLogger::log_with_tags_fmt
pub trait StructuredLogger {
    /// New logger recording `component` in every entry, under the
    /// component label (`appComponent` unless changed).
    fn for_component(&self, component: impl Into<AppComponent>) -> Self
    where
        Self: Sized;

    /// New logger recording its component under `label`.
    fn with_component_label(&self, label: impl Into<String>) -> Self
    where
        Self: Sized;

    /// New logger adding `tags` to every entry.
    ///
    /// Replaces the previous static tags; it does not accumulate.
    fn with_static_tags(&self, tags: LogTags) -> Self
    where
        Self: Sized;

    /// Log a formatted message with call-site tags.
    ///
    /// Call-site tags override static tags with the same key, and the
    /// component tag overrides both.
    fn log_with_tags_fmt(&self, level: LogLevel, tags: &LogTags, args: fmt::Arguments<'_>);

    fn log(&self, level: LogLevel, message: &str) {
        self.log_with_tags_fmt(level, &LogTags::new(), format_args!("{}", message));
    }

    fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(level, &LogTags::new(), args);
    }

    fn log_with_tags(&self, level: LogLevel, tags: &LogTags, message: &str) {
        self.log_with_tags_fmt(level, tags, format_args!("{}", message));
    }

    /// Log at `FATAL`; the sink terminates the process afterwards.
    #[inline]
    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::FATAL, args);
    }

    /// Log at `PANIC`; the sink panics afterwards.
    #[inline]
    fn panic(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::PANIC, args);
    }

    #[inline]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::ERROR, args);
    }

    #[inline]
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::WARN, args);
    }

    /// Alias for [`warn`](StructuredLogger::warn)
    #[inline]
    fn warning(&self, args: fmt::Arguments<'_>) {
        self.warn(args);
    }

    #[inline]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::INFO, args);
    }

    #[inline]
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::DEBUG, args);
    }

    #[inline]
    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::TRACE, args);
    }

    #[inline]
    fn fatal_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::FATAL, tags, args);
    }

    #[inline]
    fn panic_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::PANIC, tags, args);
    }

    #[inline]
    fn error_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::ERROR, tags, args);
    }

    #[inline]
    fn warn_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::WARN, tags, args);
    }

    #[inline]
    fn warning_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.warn_with_tags(tags, args);
    }

    #[inline]
    fn info_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::INFO, tags, args);
    }

    #[inline]
    fn debug_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::DEBUG, tags, args);
    }

    #[inline]
    fn trace_with_tags(&self, tags: &LogTags, args: fmt::Arguments<'_>) {
        self.log_with_tags_fmt(LogLevel::TRACE, tags, args);
    }
}
