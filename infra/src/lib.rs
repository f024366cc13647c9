//! # Infrastructure Layer
//!
//! Concrete implementations of the core seams: the Redis-backed
//! [`OtpStore`](otp_core::OtpStore)/[`MetricsStore`](otp_core::MetricsStore)
//! and the signed HTTP client for the partner API.

pub mod cache;
pub mod partner;

use thiserror::Error;

/// Infrastructure-level failures.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("configuration error: {0}")]
    Config(String),
}
