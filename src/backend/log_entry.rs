//! Log entry structure

use super::level::BackendLevel;
use crate::core::{LogTags, TagValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: BackendLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
    pub thread_name: Option<String>,
    #[serde(default, skip_serializing_if = "LogTags::is_empty")]
    pub tags: LogTags,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: BackendLevel, message: &str) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
            tags: LogTags::new(),
        }
    }

    /// Attach tags; keys and string values are sanitized like the message
    #[must_use]
    pub fn with_tags(mut self, tags: LogTags) -> Self {
        let needs_escaping = |s: &str| s.contains(['\n', '\r', '\t']);
        let clean = tags.iter().all(|(key, value)| {
            !needs_escaping(key.as_str())
                && !matches!(value, TagValue::String(s) if needs_escaping(s.as_str()))
        });

        self.tags = if clean {
            tags
        } else {
            tags.iter()
                .map(|(key, value)| {
                    let value = match value {
                        TagValue::String(s) => TagValue::String(Self::sanitize_message(s)),
                        other => other.clone(),
                    };
                    (Self::sanitize_message(key), value)
                })
                .collect()
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_sanitized() {
        let entry = LogEntry::new(BackendLevel::Info, "line1\nline2\r\tend");
        assert_eq!(entry.message, "line1\\nline2\\r\\tend");
    }

    #[test]
    fn test_tags_are_sanitized() {
        let entry = LogEntry::new(BackendLevel::Info, "login").with_tags(
            LogTags::new()
                .with_tag("user", "bob\n[ERROR] forged")
                .with_tag("bad\rkey", "x")
                .with_tag("count", 3),
        );

        assert_eq!(
            entry.tags.get("user").and_then(TagValue::as_str),
            Some("bob\\n[ERROR] forged")
        );
        assert!(entry.tags.contains_key("bad\\rkey"));
        assert_eq!(entry.tags.get("count"), Some(&TagValue::Int(3)));
    }

    #[test]
    fn test_thread_info_is_cached() {
        let first = LogEntry::new(BackendLevel::Info, "a");
        let second = LogEntry::new(BackendLevel::Info, "b");
        assert_eq!(first.thread_id, second.thread_id);
        assert_eq!(first.thread_name, second.thread_name);
    }

    #[test]
    fn test_empty_tags_are_not_serialized() {
        let entry = LogEntry::new(BackendLevel::Warn, "plain");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("tags").is_none());

        let entry = entry.with_tags(LogTags::new().with_tag("k", "v"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["tags"]["k"], "v");
    }
}
