//! Levels understood by the bundled backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Native level of [`Backend`](super::Backend), ordered by increasing severity
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Panic = 5,
    Fatal = 6,
}

impl BackendLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            BackendLevel::Trace => "TRACE",
            BackendLevel::Debug => "DEBUG",
            BackendLevel::Info => "INFO",
            BackendLevel::Warn => "WARN",
            BackendLevel::Error => "ERROR",
            BackendLevel::Panic => "PANIC",
            BackendLevel::Fatal => "FATAL",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            BackendLevel::Trace => BrightBlack,
            BackendLevel::Debug => Blue,
            BackendLevel::Info => Green,
            BackendLevel::Warn => Yellow,
            BackendLevel::Error => Red,
            BackendLevel::Panic => Magenta,
            BackendLevel::Fatal => BrightRed,
        }
    }

    /// Levels written to stderr by the console appender
    pub fn is_error_stream(&self) -> bool {
        *self >= BackendLevel::Error
    }
}

impl fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for BackendLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(BackendLevel::Trace),
            "DEBUG" => Ok(BackendLevel::Debug),
            "INFO" => Ok(BackendLevel::Info),
            "WARN" | "WARNING" => Ok(BackendLevel::Warn),
            "ERROR" => Ok(BackendLevel::Error),
            "PANIC" => Ok(BackendLevel::Panic),
            "FATAL" => Ok(BackendLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
