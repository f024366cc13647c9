//! Result types of the OTP engine

use serde::{Deserialize, Serialize};

/// Customer fields returned by the partner validator. Consumed transiently,
/// never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub package: String,
}

/// Outcome of a successful OTP request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpIssued {
    /// Canonical phone number the code was sent to
    pub phone: String,
    /// Seconds until the code expires
    pub expires_in: u64,
    /// Subscriber data echoed back to the caller
    pub customer: CustomerInfo,
}
