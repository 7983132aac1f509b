//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive for medroute crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "medroute=debug",
            LogLevel::Info => "medroute=info",
            LogLevel::Warning => "medroute=warn",
            LogLevel::Error => "medroute=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
