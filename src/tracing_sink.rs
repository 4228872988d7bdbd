//! `LogSink` adapter forwarding records to `tracing`
//!
//! `tracing` has no fatal or panic level: both are emitted as `ERROR` events
//! carrying a `severity` field, and the terminal handler runs afterwards just
//! as it does for [`Backend`](crate::backend::Backend). Tags travel as a
//! single `tags` field rendered as sorted `key=value` pairs.

use crate::backend::{ProcessTerminal, TerminalHandler};
use crate::core::{LogSink, LogTags, TaggedLogger};
use std::sync::Arc;
use tracing::Level;

/// Native level of [`TracingSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingLevel {
    Event(Level),
    Panic,
    Fatal,
}

pub struct TracingSink {
    empty_tags_field: bool,
    terminal: Arc<dyn TerminalHandler>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::with_terminal(Arc::new(ProcessTerminal))
    }

    pub fn with_terminal(terminal: Arc<dyn TerminalHandler>) -> Self {
        Self {
            empty_tags_field: true,
            terminal,
        }
    }

    /// Leave the `tags` field off events whose tag set is empty
    #[must_use]
    pub fn skip_empty_tags(mut self) -> Self {
        self.empty_tags_field = false;
        self
    }

    #[must_use]
    pub fn into_logger(self) -> TaggedLogger<TracingSink> {
        TaggedLogger::new(Arc::new(self))
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! tracing_event {
    ($level:expr, $tags:expr, $message:expr, $with_tags:expr $(, $key:ident = $value:expr)*) => {
        if $with_tags {
            tracing::event!($level, $($key = $value,)* tags = %$tags, "{}", $message)
        } else {
            tracing::event!($level, $($key = $value,)* "{}", $message)
        }
    };
}

impl LogSink for TracingSink {
    type Level = TracingLevel;

    fn resolve_level(&self, name: &str) -> Option<TracingLevel> {
        match name {
            "trace" => Some(TracingLevel::Event(Level::TRACE)),
            "debug" => Some(TracingLevel::Event(Level::DEBUG)),
            "info" => Some(TracingLevel::Event(Level::INFO)),
            "warn" | "warning" => Some(TracingLevel::Event(Level::WARN)),
            "error" => Some(TracingLevel::Event(Level::ERROR)),
            "panic" => Some(TracingLevel::Panic),
            "fatal" => Some(TracingLevel::Fatal),
            _ => None,
        }
    }

    fn error_level(&self) -> TracingLevel {
        TracingLevel::Event(Level::ERROR)
    }

    fn emit(&self, level: TracingLevel, tags: &LogTags, message: &str) {
        let with_tags = self.empty_tags_field || !tags.is_empty();

        // The level of tracing::event! must be a constant
        match level {
            TracingLevel::Event(event_level) => {
                if event_level == Level::TRACE {
                    tracing_event!(Level::TRACE, tags, message, with_tags)
                } else if event_level == Level::DEBUG {
                    tracing_event!(Level::DEBUG, tags, message, with_tags)
                } else if event_level == Level::INFO {
                    tracing_event!(Level::INFO, tags, message, with_tags)
                } else if event_level == Level::WARN {
                    tracing_event!(Level::WARN, tags, message, with_tags)
                } else {
                    tracing_event!(Level::ERROR, tags, message, with_tags)
                }
            }
            TracingLevel::Panic => {
                tracing_event!(Level::ERROR, tags, message, with_tags, severity = "panic");
                self.terminal.on_panic(message);
            }
            TracingLevel::Fatal => {
                tracing_event!(Level::ERROR, tags, message, with_tags, severity = "fatal");
                self.terminal.on_fatal(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{RecordingTerminal, TerminalEvent};
    use crate::core::{LogLevel, StructuredLogger};

    #[test]
    fn test_all_facade_levels_resolve() {
        let sink = TracingSink::new();
        for level in LogLevel::ALL {
            assert!(sink.resolve_level(level.name()).is_some(), "{}", level);
        }
        assert_eq!(sink.resolve_level("unknown"), None);
        assert_eq!(sink.resolve_level("warning"), Some(TracingLevel::Event(Level::WARN)));
    }

    #[test]
    fn test_terminal_levels_reach_handler() {
        let terminal = Arc::new(RecordingTerminal::new());
        let logger = TracingSink::with_terminal(terminal.clone())
            .skip_empty_tags()
            .into_logger()
            .for_component("worker");

        logger.info(format_args!("routine"));
        logger.panic(format_args!("bad state {}", 7));
        logger.fatal(format_args!("cannot continue"));

        assert_eq!(
            terminal.events(),
            vec![
                TerminalEvent::Panic("bad state 7".to_string()),
                TerminalEvent::Fatal("cannot continue".to_string()),
            ]
        );
    }
}
