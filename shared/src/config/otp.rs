//! OTP lifecycle configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Tunables for OTP issuance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a stored code stays valid
    pub expiry_secs: u64,

    /// Per-phone cooldown between OTP requests, in seconds
    pub throttle_window_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_secs: 300,
            throttle_window_secs: 60,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables (`OTP_EXPIRY`, `OTP_THROTTLE_WINDOW`)
    pub fn from_env() -> Self {
        Self {
            expiry_secs: env_or("OTP_EXPIRY", 300),
            throttle_window_secs: env_or("OTP_THROTTLE_WINDOW", 60),
        }
    }
}
