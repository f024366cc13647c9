//! Partner (FTTH) API client configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// Configuration for the signed partner API client.
///
/// `api_key` identifies the caller and travels in the `Key` header;
/// `api_secret` is the shared HMAC secret and never leaves the process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PartnerConfig {
    /// Base URL, endpoint paths are appended verbatim
    pub base_url: String,

    /// API key sent in the `Key` header and mixed into the signature
    pub api_key: String,

    /// Shared secret for the HMAC-SHA256 request signature
    pub api_secret: String,

    /// Package identifier sent in the `FTTH-Api-Package` header
    pub package: String,

    /// Outbound request timeout in seconds, single attempt, no retry
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://api.myxl.xlaxiata.co.id/ftth/api/v8/"),
            api_key: String::new(),
            api_secret: String::new(),
            package: String::from("Default-Plan"),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl PartnerConfig {
    /// Create from environment variables (`BASE_URL`, `API_KEY`, `API_SECRET`,
    /// `API_PACKAGE`)
    pub fn from_env() -> Self {
        Self {
            base_url: env_or_string("BASE_URL", "https://api.myxl.xlaxiata.co.id/ftth/api/v8/"),
            api_key: env_or_string("API_KEY", ""),
            api_secret: env_or_string("API_SECRET", ""),
            package: env_or_string("API_PACKAGE", "Default-Plan"),
            request_timeout_secs: env_or("PARTNER_TIMEOUT_SECS", default_timeout()),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
