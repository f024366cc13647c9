//! Redis cache configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// Redis connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis host
    pub host: String,

    /// Redis port
    pub port: u16,

    /// Redis password, empty when the server runs without auth
    #[serde(default)]
    pub password: String,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 6379,
            password: String::new(),
            database: 0,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables (`REDIS_HOST`, `REDIS_PORT`,
    /// `REDIS_PASSWORD`, `REDIS_DB`)
    pub fn from_env() -> Self {
        Self {
            host: env_or_string("REDIS_HOST", "localhost"),
            port: env_or("REDIS_PORT", 6379),
            password: env_or_string("REDIS_PASSWORD", ""),
            database: env_or("REDIS_DB", 0),
        }
    }

    /// Build the Redis connection URL
    pub fn url(&self) -> String {
        if self.password.is_empty() {
            format!("redis://{}:{}/{}", self.host, self.port, self.database)
        } else {
            format!(
                "redis://:{}@{}:{}/{}",
                self.password, self.host, self.port, self.database
            )
        }
    }
}
