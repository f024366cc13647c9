//! Shared types and utilities for the OTP service
//!
//! This crate provides the pieces used across all server crates:
//! - Environment-sourced configuration types
//! - The JSON response envelope
//! - Phone number utilities (normalization, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, LoggingConfig, OtpConfig, PartnerConfig, RateLimitConfig,
    ServerConfig,
};
pub use types::response::{ApiResponse, ErrorBody};
pub use utils::phone;
