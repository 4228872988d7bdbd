//! File appender implementation

use crate::backend::{Appender, LogEntry, OutputFormat, TimestampFormat};
use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one line per entry to a file, creating it if needed
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        })
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_log_facade::appenders::FileAppender;
    /// use rust_log_facade::backend::TimestampFormat;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// JSON here gives one JSON object per line (JSONL)
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut output = self.output_format.format(entry, &self.timestamp_format);
        output.push('\n');

        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendLevel;
    use crate::core::LogTags;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_appender_text() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.log");

        let mut appender = FileAppender::new(&log_path)?;
        let entry = LogEntry::new(BackendLevel::Info, "User logged in")
            .with_tags(LogTags::new().with_tag("user_id", 123));

        appender.append(&entry)?;
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        assert!(content.contains("[INFO ]"));
        assert!(content.contains("User logged in user_id=123"));
        assert_eq!(content.lines().count(), 1);
        Ok(())
    }

    #[test]
    fn test_file_appender_jsonl() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let mut appender = FileAppender::new(&log_path)?.with_output_format(OutputFormat::Json);
        for i in 0..5 {
            let entry = LogEntry::new(BackendLevel::Debug, &format!("Iteration {}", i))
                .with_tags(LogTags::new().with_tag("iteration", i));
            appender.append(&entry)?;
        }
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert_eq!(parsed["iteration"], i);
            assert_eq!(parsed["level"], "DEBUG");
        }
        Ok(())
    }

    #[test]
    fn test_file_appender_bad_path() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("missing").join("app.log");

        let err = FileAppender::new(&bad).err().unwrap();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
