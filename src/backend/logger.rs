//! Synchronous structured backend behind the facade

use super::{
    appender::Appender,
    config::BackendConfig,
    level::BackendLevel,
    log_entry::LogEntry,
    metrics::SinkMetrics,
    terminal::{ProcessTerminal, TerminalHandler},
};
use crate::appenders::ConsoleAppender;
use crate::core::{LogSink, LogTags, Result, TaggedLogger};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::sync::Arc;

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Writes each record to a single appender, synchronously.
///
/// The backend filters by a minimum level, isolates appender failures and
/// panics from the caller, and runs the terminal handler after fatal and
/// panic records. Fatal and panic records trigger the terminal handler even
/// when they are below the minimum level.
pub struct Backend {
    min_level: RwLock<BackendLevel>,
    appender: Mutex<Box<dyn Appender>>,
    terminal: Arc<dyn TerminalHandler>,
    metrics: SinkMetrics,
}

impl Backend {
    /// Console backend at `Info` that exits on fatal and panics on panic
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> BackendBuilder {
        BackendBuilder::new()
    }

    /// Console backend configured from `config`
    pub fn console_from_config(config: &BackendConfig) -> Result<Self> {
        config.validate()?;

        let appender = ConsoleAppender::with_colors(config.colors)
            .with_output_format(config.output_format.clone())
            .with_timestamp_format(config.timestamp_format.clone());

        Ok(Self::builder()
            .min_level(config.min_level)
            .appender(appender)
            .build())
    }

    /// Wrap this backend in a root facade logger
    #[must_use]
    pub fn into_logger(self) -> TaggedLogger<Backend> {
        TaggedLogger::new(Arc::new(self))
    }

    pub fn min_level(&self) -> BackendLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: BackendLevel) {
        *self.min_level.write() = level;
    }

    pub fn is_enabled(&self, level: BackendLevel) -> bool {
        level >= self.min_level()
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    /// Append one entry, isolating appender errors and panics
    fn write(&self, entry: &LogEntry) {
        let mut appender = self.appender.lock();
        let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(entry)
        }));

        match append_result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                self.metrics.record_failed();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    appender.name(),
                    panic_message(panic_info.as_ref())
                );
                self.metrics.record_failed();
            }
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for Backend {
    type Level = BackendLevel;

    fn resolve_level(&self, name: &str) -> Option<BackendLevel> {
        name.parse().ok()
    }

    fn error_level(&self) -> BackendLevel {
        BackendLevel::Error
    }

    fn emit(&self, level: BackendLevel, tags: &LogTags, message: &str) {
        if self.is_enabled(level) {
            let entry = LogEntry::new(level, message).with_tags(tags.clone());
            self.write(&entry);
        } else {
            self.metrics.record_filtered();
        }

        match level {
            BackendLevel::Fatal => {
                self.metrics.record_terminal();
                if let Err(e) = self.flush() {
                    eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
                }
                self.terminal.on_fatal(message);
            }
            BackendLevel::Panic => {
                self.metrics.record_terminal();
                self.terminal.on_panic(message);
            }
            _ => {}
        }
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        if let Err(e) = self.appender.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Backend shutting down with {} failed writes (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing a [`Backend`] with a fluent API
///
/// # Example
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::Arc;
///
/// let terminal = Arc::new(RecordingTerminal::new());
/// let backend = Backend::builder()
///     .min_level(BackendLevel::Debug)
///     .appender(MemoryAppender::new())
///     .terminal(terminal.clone())
///     .build();
/// assert_eq!(backend.min_level(), BackendLevel::Debug);
/// ```
pub struct BackendBuilder {
    min_level: BackendLevel,
    appender: Option<Box<dyn Appender>>,
    terminal: Arc<dyn TerminalHandler>,
}

impl BackendBuilder {
    pub fn new() -> Self {
        Self {
            min_level: BackendLevel::Info,
            appender: None,
            terminal: Arc::new(ProcessTerminal),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: BackendLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the appender; a later call replaces an earlier one.
    ///
    /// Defaults to a [`ConsoleAppender`] when never called.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn terminal(mut self, terminal: Arc<dyn TerminalHandler>) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn build(self) -> Backend {
        Backend {
            min_level: RwLock::new(self.min_level),
            appender: Mutex::new(
                self.appender
                    .unwrap_or_else(|| Box::new(ConsoleAppender::new())),
            ),
            terminal: self.terminal,
            metrics: SinkMetrics::new(),
        }
    }
}

impl Default for BackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}
