//! # OTP Core
//!
//! Domain layer of the OTP service: the issue/verify state machine, the
//! per-number throttle, daily usage metrics, and the traits that abstract
//! the state store and the partner gateway. Everything here is I/O-free and
//! injectable; concrete Redis and HTTP implementations live in `otp_infra`.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::PhoneNumber;
pub use errors::{DomainError, DomainResult};
pub use services::metrics::{DailyMetrics, MetricCounter, MetricsRecorder, MetricsStore};
pub use services::otp::{CustomerInfo, OtpIssued, OtpService, OtpServiceConfig, OtpStore, PartnerGateway};
