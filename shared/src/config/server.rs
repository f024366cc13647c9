//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Debug mode lowers the default log filter and is meant for local runs
    #[serde(default)]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables (`HOST`, `PORT`, `DEBUG`)
    pub fn from_env() -> Self {
        Self {
            host: env_or_string("HOST", "0.0.0.0"),
            port: env_or("PORT", 5000),
            debug: env_or_string("DEBUG", "false").to_lowercase() == "true",
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
