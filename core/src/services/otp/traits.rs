//! Seams for the state store and the partner API

use async_trait::async_trait;

use super::types::CustomerInfo;

/// Storage seam for OTP state. Implementations must provide atomic TTL
/// semantics; all keys are derived from the canonical phone number.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a code under the phone's OTP key, overwriting any previous one.
    async fn store_code(&self, phone: &str, code: &str, ttl_secs: u64) -> Result<(), String>;

    /// Fetch the live code for a phone, `None` when absent or expired.
    async fn fetch_code(&self, phone: &str) -> Result<Option<String>, String>;

    /// Delete the code. Atomic; a concurrent second delete observes absence.
    async fn delete_code(&self, phone: &str) -> Result<bool, String>;

    /// Whether the per-phone throttle window is currently active.
    async fn throttle_active(&self, phone: &str) -> Result<bool, String>;

    /// Atomically claim the throttle window (set-if-absent with TTL).
    /// Returns `false` when another request already holds it.
    async fn claim_throttle(&self, phone: &str, window_secs: u64) -> Result<bool, String>;
}

/// The partner API consulted for customer validation, SMS delivery, and
/// activity logging. Transport failures and negative answers collapse into
/// the same absent/false signal; the engine never distinguishes them.
#[async_trait]
pub trait PartnerGateway: Send + Sync {
    /// Look up the subscriber. `None` means unknown customer or partner
    /// unreachable.
    async fn validate_customer(&self, phone: &str) -> Option<CustomerInfo>;

    /// Deliver the OTP SMS. `false` on any failure.
    async fn send_sms(&self, phone: &str, code: &str) -> bool;

    /// Best-effort activity log; implementations swallow errors.
    async fn log_activity(&self, phone: &str, activity: &str, status: &str);
}
