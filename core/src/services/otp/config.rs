//! OTP engine configuration

/// Tunables for the OTP engine.
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds a stored code stays valid
    pub code_ttl_secs: u64,

    /// Per-phone cooldown between requests, in seconds
    pub throttle_window_secs: u64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_secs: 300,
            throttle_window_secs: 60,
        }
    }
}

impl From<&otp_shared::config::OtpConfig> for OtpServiceConfig {
    fn from(config: &otp_shared::config::OtpConfig) -> Self {
        Self {
            code_ttl_secs: config.expiry_secs,
            throttle_window_secs: config.throttle_window_secs,
        }
    }
}
