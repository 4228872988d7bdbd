//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("BackendConfig", "empty timestamp format");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("BackendConfig", "empty timestamp format");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for BackendConfig: empty timestamp format"
        );

        let err = LoggerError::writer("appender gone");
        assert_eq!(err.to_string(), "Writer error: appender gone");
    }

    #[test]
    fn test_every_variant_is_raised_by_the_crate() {
        fn kind(err: &LoggerError) -> &'static str {
            match err {
                LoggerError::IoOperation { .. } => "io_operation",
                LoggerError::IoError(_) => "io",
                LoggerError::JsonError(_) => "json",
                LoggerError::InvalidConfiguration { .. } => "config",
                LoggerError::WriterError(_) => "writer",
            }
        }

        let missing_dir = std::env::temp_dir().join("no-such-dir-for-log").join("app.log");
        let open_err = crate::appenders::FileAppender::new(missing_dir).err().unwrap();
        assert_eq!(kind(&open_err), "io_operation");

        let json_err = crate::backend::BackendConfig::from_json("{").unwrap_err();
        assert_eq!(kind(&json_err), "json");

        let config_err =
            crate::backend::BackendConfig::from_json(r#"{"timestamp_format": {"Custom": ""}}"#)
                .unwrap_err();
        assert_eq!(kind(&config_err), "config");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
