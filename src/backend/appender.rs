//! Appender trait for log output destinations

use super::log_entry::LogEntry;
use crate::core::Result;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
