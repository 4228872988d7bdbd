//! In-memory appender for capturing entries in tests

use crate::backend::{Appender, LogEntry};
use crate::core::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every appended entry in memory.
///
/// Clones share one buffer: hand one clone to the backend and keep another
/// to inspect what was written.
///
/// ```
/// use rust_log_facade::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logger = Backend::builder().appender(memory.clone()).build().into_logger();
///
/// logger.warn(format_args!("ready"));
///
/// assert_eq!(memory.len(), 1);
/// assert_eq!(memory.last().unwrap().level, BackendLevel::Warn);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendLevel;

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemoryAppender::new();
        let mut writer = memory.clone();

        writer.append(&LogEntry::new(BackendLevel::Info, "one")).unwrap();
        writer.append(&LogEntry::new(BackendLevel::Warn, "two")).unwrap();

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.last().unwrap().message, "two");

        memory.clear();
        assert!(writer.is_empty());
        assert!(memory.last().is_none());
    }
}
