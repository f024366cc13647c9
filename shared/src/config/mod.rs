//! Configuration types for the OTP service
//!
//! Every setting is sourced from the environment with a hard default, so the
//! service starts with no configuration at all and each deployment overrides
//! only what it needs.

pub mod cache;
pub mod logging;
pub mod otp;
pub mod partner;
pub mod rate_limit;
pub mod server;

pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use otp::OtpConfig;
pub use partner::PartnerConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Aggregated application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub partner: PartnerConfig,
    pub otp: OtpConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            partner: PartnerConfig::from_env(),
            otp: OtpConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }
}

/// Read an environment variable, falling back to `default` when unset or
/// unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_or_string(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
