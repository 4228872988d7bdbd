//! Serializable backend configuration
//!
//! Lets an application keep its backend settings next to the rest of its
//! configuration and build a console backend from them.

use super::level::BackendLevel;
use super::output_format::OutputFormat;
use super::timestamp::TimestampFormat;
use crate::core::{LoggerError, Result};
use serde::{Deserialize, Serialize};

/// Settings for [`Backend::console_from_config`](super::Backend::console_from_config)
///
/// Missing fields take their defaults:
///
/// ```
/// use rust_log_facade::backend::{BackendConfig, BackendLevel, OutputFormat};
///
/// let config = BackendConfig::from_json(r#"{"min_level": "debug", "output_format": "json"}"#).unwrap();
/// assert_eq!(config.min_level, BackendLevel::Debug);
/// assert_eq!(config.output_format, OutputFormat::Json);
/// assert!(config.colors);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub min_level: BackendLevel,
    pub output_format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    pub colors: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            min_level: BackendLevel::Info,
            output_format: OutputFormat::Text,
            timestamp_format: TimestampFormat::Iso8601,
            colors: true,
        }
    }
}

impl BackendConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = &self.timestamp_format {
            if format_str.trim().is_empty() {
                return Err(LoggerError::config(
                    "BackendConfig",
                    "custom timestamp format must not be empty",
                ));
            }
            if !TimestampFormat::is_valid_strftime(format_str) {
                return Err(LoggerError::config(
                    "BackendConfig",
                    format!("invalid custom timestamp format '{}'", format_str),
                ));
            }
        }
        Ok(())
    }
}
