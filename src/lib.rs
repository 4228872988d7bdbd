//! # Rust Log Facade
//!
//! A structured logging facade: callers log at graded severities with
//! contextual tags through [`StructuredLogger`], without depending on the
//! concrete backend behind it.
//!
//! ## Features
//!
//! - **Seven severities**: fatal, panic, error, warn, info, debug, trace
//! - **Tags**: per-call tags, static tags and a component tag per logger
//! - **Immutable derivation**: `for_component`, `with_component_label` and
//!   `with_static_tags` return new loggers sharing only the sink
//! - **Pluggable sinks**: anything implementing [`LogSink`]; a synchronous
//!   [`Backend`] with console, file and memory appenders is included
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::info;
//!
//! let memory = MemoryAppender::new();
//! let logger = Backend::builder()
//!     .appender(memory.clone())
//!     .build()
//!     .into_logger()
//!     .for_component("svc")
//!     .with_static_tags(LogTags::new().with_tag("env", "prod"));
//!
//! info!(logger, tags: LogTags::new().with_tag("env", "test"), "started");
//!
//! let entry = memory.last().unwrap();
//! assert_eq!(entry.tags.get("env").and_then(TagValue::as_str), Some("test"));
//! assert_eq!(entry.tags.get("appComponent").and_then(TagValue::as_str), Some("svc"));
//! ```

pub mod appenders;
pub mod backend;
pub mod core;
pub mod macros;

#[cfg(feature = "tracing-sink")]
pub mod tracing_sink;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::backend::{
        Appender, Backend, BackendBuilder, BackendConfig, BackendLevel, LogEntry, OutputFormat,
        ProcessTerminal, RecordingTerminal, TerminalHandler, TimestampFormat,
    };
    pub use crate::core::{
        AppComponent, LogLevel, LogSink, LogTags, LoggerError, Result, StructuredLogger,
        TagValue, TaggedLogger, DEFAULT_APP_COMPONENT_TAG,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use backend::{Appender, Backend, BackendConfig, BackendLevel, LogEntry};
pub use core::{
    AppComponent, LogLevel, LogSink, LogTags, LoggerError, Result, StructuredLogger, TagValue,
    TaggedLogger, DEFAULT_APP_COMPONENT_TAG,
};

#[cfg(feature = "tracing-sink")]
pub use tracing_sink::{TracingLevel, TracingSink};
