//! Per-client rate limiting configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Rate limits applied at the HTTP layer, per client IP.
///
/// This is the generic outer throttle; the per-phone-number cooldown is a
/// separate mechanism owned by the OTP engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Max OTP requests per client IP per window
    pub requests_per_window: u32,

    /// Window length in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: 3,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables (`RATE_LIMIT_PER_MINUTE`)
    pub fn from_env() -> Self {
        Self {
            requests_per_window: env_or("RATE_LIMIT_PER_MINUTE", 3),
            window_secs: 60,
        }
    }
}
