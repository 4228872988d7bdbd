//! Bundled structured backend implementing `LogSink`

pub mod appender;
pub mod config;
pub mod level;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod terminal;
pub mod timestamp;

pub use appender::Appender;
pub use config::BackendConfig;
pub use level::BackendLevel;
pub use log_entry::LogEntry;
pub use logger::{Backend, BackendBuilder};
pub use metrics::SinkMetrics;
pub use output_format::OutputFormat;
pub use terminal::{
    ProcessTerminal, RecordingTerminal, TerminalEvent, TerminalHandler, FATAL_EXIT_CODE,
};
pub use timestamp::TimestampFormat;
