//! Logging macros for ergonomic message formatting.
//!
//! Each macro takes a logger implementing
//! [`StructuredLogger`](crate::core::StructuredLogger), optional call-site
//! tags introduced by `tags:`, and `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{info, tags, warn};
//!
//! let memory = MemoryAppender::new();
//! let logger = Backend::builder().appender(memory.clone()).build().into_logger();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, tags: tags! { "retry" => 3 }, "Upstream slow");
//!
//! assert_eq!(memory.len(), 2);
//! ```

/// Build a [`LogTags`](crate::core::LogTags) from `key => value` pairs.
///
/// ```
/// use rust_log_facade::tags;
///
/// let tags = tags! { "requestID" => "abc-123", "attempt" => 2 };
/// assert_eq!(tags.len(), 2);
/// assert!(tags! {}.is_empty());
/// ```
#[macro_export]
macro_rules! tags {
    () => {
        $crate::core::LogTags::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::core::LogTags::new()$(.with_tag($key, $value))+
    };
}

/// Log a message at an explicit level.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Backend::builder().appender(MemoryAppender::new()).build().into_logger();
/// use rust_log_facade::{log, tags};
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, tags: tags! { "code" => 500 }, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, tags: $tags:expr, $($arg:tt)+) => {{
        use $crate::core::StructuredLogger as _;
        $logger.log_with_tags_fmt($level, &$tags, format_args!($($arg)+))
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::core::StructuredLogger as _;
        $logger.log_fmt($level, format_args!($($arg)+))
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::TRACE, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::WARN, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a fatal-level message; the sink terminates the process afterwards.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::FATAL, $($arg)+)
    };
}
