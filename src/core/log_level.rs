//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log call.
///
/// The seven named levels are declared most severe first, so a lower ordinal
/// means a more severe level. The type is deliberately open: any `u32` can be
/// turned into a `LogLevel`, and values outside the named set display as
/// `"unknown"`. Sinks cannot resolve such levels, so the facade drops the
/// message and records a diagnostic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub u32);

impl LogLevel {
    /// Logs the message, then the sink terminates the process.
    pub const FATAL: LogLevel = LogLevel(0);
    /// Logs the message, then the sink raises a panic.
    pub const PANIC: LogLevel = LogLevel(1);
    /// Errors that should definitely be noted.
    pub const ERROR: LogLevel = LogLevel(2);
    /// Non-critical events that deserve attention.
    pub const WARN: LogLevel = LogLevel(3);
    /// General operational entries.
    pub const INFO: LogLevel = LogLevel(4);
    /// Verbose output, usually only enabled during development.
    pub const DEBUG: LogLevel = LogLevel(5);
    /// Finer-grained events than `DEBUG`.
    pub const TRACE: LogLevel = LogLevel(6);

    /// All named levels in descending order of severity.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::FATAL,
        LogLevel::PANIC,
        LogLevel::ERROR,
        LogLevel::WARN,
        LogLevel::INFO,
        LogLevel::DEBUG,
        LogLevel::TRACE,
    ];

    /// Name used for display and for resolving the level on a sink
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::FATAL => "fatal",
            LogLevel::PANIC => "panic",
            LogLevel::ERROR => "error",
            LogLevel::WARN => "warning",
            LogLevel::INFO => "info",
            LogLevel::DEBUG => "debug",
            LogLevel::TRACE => "trace",
            _ => "unknown",
        }
    }

    pub const fn ordinal(self) -> u32 {
        self.0
    }

    /// Whether this is one of the seven named levels
    pub const fn is_known(self) -> bool {
        self.0 <= LogLevel::TRACE.0
    }

    pub const fn is_more_severe_than(self, other: LogLevel) -> bool {
        self.0 < other.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl From<u32> for LogLevel {
    fn from(value: u32) -> Self {
        LogLevel(value)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_of_named_levels() {
        assert_eq!(LogLevel::FATAL.name(), "fatal");
        assert_eq!(LogLevel::PANIC.name(), "panic");
        assert_eq!(LogLevel::ERROR.name(), "error");
        assert_eq!(LogLevel::WARN.name(), "warning");
        assert_eq!(LogLevel::INFO.name(), "info");
        assert_eq!(LogLevel::DEBUG.name(), "debug");
        assert_eq!(LogLevel::TRACE.name(), "trace");
    }

    #[test]
    fn test_names_are_distinct() {
        let names: HashSet<&str> = LogLevel::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names.len(), 7);
        assert!(!names.contains("unknown"));
    }

    #[test]
    fn test_unknown_level_is_constructible() {
        let level = LogLevel::from(666);
        assert_eq!(level.name(), "unknown");
        assert!(!level.is_known());
        assert_eq!(level.to_string(), "unknown");
    }

    #[test]
    fn test_severity_order() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0].is_more_severe_than(pair[1]));
            assert!(pair[0] < pair[1]);
        }
        assert!(LogLevel::ALL.iter().all(|l| l.is_known()));
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&LogLevel::WARN).unwrap();
        assert_eq!(json, "3");
        let parsed: LogLevel = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, LogLevel(42));
    }
}
