//! Logging configuration

use super::env_or_string;

/// Log destination configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Log file path; logs go to stderr when unset
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Create from environment variables (`LOG_FILE`)
    pub fn from_env() -> Self {
        let file = env_or_string("LOG_FILE", "");
        Self {
            file: if file.is_empty() { None } else { Some(file) },
        }
    }
}
