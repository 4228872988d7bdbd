//! Facade types and traits

pub mod error;
pub mod log_level;
pub mod log_tags;
pub mod sink;
pub mod structured_logger;
pub mod tagged_logger;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_tags::{AppComponent, LogTags, TagValue, DEFAULT_APP_COMPONENT_TAG};
pub use sink::LogSink;
pub use structured_logger::StructuredLogger;
pub use tagged_logger::{unmapped_level_message, TaggedLogger};
