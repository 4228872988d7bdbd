//! Output format configuration for log entries
//!
//! - Text: Human-readable format (default)
//! - Json: One JSON object per entry, tags flattened into it
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use crate::core::TagValue;
use serde::{Deserialize, Serialize};

/// Field names every format writes itself; a tag with one of these names is
/// shadowed by the fixed field
const FIXED_FIELDS: [&str; 5] = ["timestamp", "level", "message", "thread_id", "thread_name"];

/// Output format for log entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] main - Request processed env=prod`
    #[default]
    Text,

    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","message":"Request processed"}`
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=INFO message="Request processed"`
    Logfmt,
}

impl OutputFormat {
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(entry, timestamp_format),
            OutputFormat::Json => self.format_json(entry, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(entry, timestamp_format),
        }
    }

    fn format_text(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let thread_name = entry.thread_name.as_ref().unwrap_or(&entry.thread_id);

        let base = format!(
            "[{}] [{:5}] {} - {}",
            timestamp_format.format(&entry.timestamp),
            entry.level.to_str(),
            thread_name,
            entry.message
        );

        if entry.tags.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.tags.format_tags())
        }
    }

    fn format_json(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        // Tags go in first so the fixed fields win on a name clash
        json_obj.extend(entry.tags.to_json_map());

        json_obj.insert(
            "timestamp".to_string(),
            timestamp_format.to_json_value(&entry.timestamp),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        json_obj.insert(
            "thread_id".to_string(),
            serde_json::Value::String(entry.thread_id.clone()),
        );
        if let Some(ref name) = entry.thread_name {
            json_obj.insert(
                "thread_name".to_string(),
                serde_json::Value::String(name.clone()),
            );
        }

        serde_json::Value::Object(json_obj).to_string()
    }

    fn format_logfmt(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut parts = vec![
            format!(
                "timestamp={}",
                escape_logfmt_value(&timestamp_format.format(&entry.timestamp))
            ),
            format!("level={}", entry.level.to_str()),
            format!("message={}", quote_logfmt_value(&entry.message)),
            format!("thread_id={}", escape_logfmt_value(&entry.thread_id)),
        ];
        if let Some(ref name) = entry.thread_name {
            parts.push(format!("thread_name={}", escape_logfmt_value(name)));
        }

        for (key, value) in entry.tags.sorted() {
            let key = escape_logfmt_key(key);
            if key.is_empty() || FIXED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            let formatted_value = match value {
                TagValue::String(s) => escape_logfmt_value(s),
                TagValue::Json(json) => escape_logfmt_value(&json.to_string()),
                other => other.to_string(),
            };
            parts.push(format!("{}={}", key, formatted_value));
        }

        parts.join(" ")
    }
}

/// Escape a logfmt key (remove spaces and special chars)
fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Quote a logfmt value if it contains spaces, quotes or `=`
fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendLevel;
    use crate::core::LogTags;

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(BackendLevel::Info, "Test message");
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("INFO"));
        assert!(result.contains("Test message"));
    }

    #[test]
    fn test_text_format_with_tags() {
        let entry = LogEntry::new(BackendLevel::Info, "User logged in").with_tags(
            LogTags::new()
                .with_tag("user_id", 123)
                .with_tag("action", "login"),
        );

        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.ends_with("User logged in action=login user_id=123"));
    }

    #[test]
    fn test_json_format() {
        let entry = LogEntry::new(BackendLevel::Panic, "Error occurred");
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "PANIC");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_format_with_tags() {
        let entry = LogEntry::new(BackendLevel::Info, "Request completed").with_tags(
            LogTags::new()
                .with_tag("request_id", "abc-123")
                .with_tag("latency_ms", 42)
                .with_tag("level", "shadowed"),
        );

        let result = OutputFormat::Json.format(&entry, &TimestampFormat::UnixMillis);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["request_id"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
        assert_eq!(parsed["level"], "INFO");
        assert!(parsed["timestamp"].is_number());
    }

    #[test]
    fn test_logfmt_format() {
        let entry = LogEntry::new(BackendLevel::Warn, "Warning message").with_tags(
            LogTags::new()
                .with_tag("user", "alice")
                .with_tag("count", 5)
                .with_tag("query", "SELECT * FROM users WHERE id=1"),
        );

        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert!(result.contains("level=WARN"));
        assert!(result.contains("message=\"Warning message\""));
        assert!(result.contains("user=alice"));
        assert!(result.contains("count=5"));
        assert!(result.contains("query=\"SELECT * FROM users WHERE id=1\""));
    }

    #[test]
    fn test_logfmt_fixed_fields_win() {
        let entry = LogEntry::new(BackendLevel::Info, "real").with_tags(
            LogTags::new()
                .with_tag("level", "ERROR")
                .with_tag("message", "forged")
                .with_tag("l=e:v", "kept")
                .with_tag("=!?", "dropped")
                .with_tag("ids", serde_json::json!(["a b", "c"])),
        );

        let result = OutputFormat::Logfmt.format(&entry, &TimestampFormat::Iso8601);

        assert_eq!(result.matches("level=").count(), 1);
        assert!(result.contains("level=INFO"));
        assert_eq!(result.matches("message=").count(), 1);
        assert!(result.contains("message=\"real\""));
        assert!(result.contains("lev=kept"));
        assert!(!result.contains("dropped"));
        assert!(!result.contains(" ="));
        assert!(result.contains(r#"ids="[\"a b\",\"c\"]""#));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
