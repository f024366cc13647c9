//! OTP engine: issue, throttle, verify
//!
//! The engine owns the full request/verify state machine. All state lives in
//! the injected [`OtpStore`]; the service itself holds nothing mutable, so a
//! fleet of instances behaves identically to one.

pub mod config;
pub mod generator;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use constant_time_eq::constant_time_eq;

use crate::domain::PhoneNumber;
use crate::errors::{DomainError, DomainResult};
use crate::services::metrics::{MetricsRecorder, MetricsStore};

pub use config::OtpServiceConfig;
pub use traits::{OtpStore, PartnerGateway};
pub use types::{CustomerInfo, OtpIssued};

/// The OTP issue/verify service.
pub struct OtpService<S: OtpStore, P: PartnerGateway, M: MetricsStore> {
    store: Arc<S>,
    partner: Arc<P>,
    metrics: MetricsRecorder<M>,
    config: OtpServiceConfig,
}

impl<S, P, M> OtpService<S, P, M>
where
    S: OtpStore + 'static,
    P: PartnerGateway + 'static,
    M: MetricsStore + 'static,
{
    pub fn new(
        store: Arc<S>,
        partner: Arc<P>,
        metrics: MetricsRecorder<M>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            partner,
            metrics,
            config,
        }
    }

    /// Issue a new OTP for a validated subscriber number.
    ///
    /// Order matters: the throttle is checked before the partner is
    /// consulted, and the window is claimed before the SMS attempt, so a
    /// partner outage still consumes the cooldown and cannot be used to
    /// hammer the SMS endpoint.
    pub async fn request_code(&self, phone: &PhoneNumber) -> DomainResult<OtpIssued> {
        let msisdn = phone.as_str();

        if self
            .store
            .throttle_active(msisdn)
            .await
            .map_err(DomainError::store)?
        {
            tracing::warn!(
                phone = %phone.masked(),
                event = "otp_throttled",
                "OTP request rejected, cooldown window active"
            );
            return Err(DomainError::RateLimited);
        }

        let customer = match self.partner.validate_customer(msisdn).await {
            Some(customer) => customer,
            None => {
                tracing::warn!(
                    phone = %phone.masked(),
                    event = "customer_rejected",
                    "number is not a registered subscriber or partner unreachable"
                );
                return Err(DomainError::CustomerNotFound);
            }
        };

        // Claim the cooldown window atomically; losing the claim means a
        // concurrent request for the same number got there first.
        if !self
            .store
            .claim_throttle(msisdn, self.config.throttle_window_secs)
            .await
            .map_err(DomainError::store)?
        {
            tracing::warn!(
                phone = %phone.masked(),
                event = "otp_throttled",
                "lost cooldown claim to a concurrent request"
            );
            return Err(DomainError::RateLimited);
        }

        let code = generator::generate_code();
        self.store
            .store_code(msisdn, &code, self.config.code_ttl_secs)
            .await
            .map_err(DomainError::store)?;

        tracing::info!(
            phone = %phone.masked(),
            event = "otp_generated",
            expires_in = self.config.code_ttl_secs,
            "generated and stored OTP"
        );

        let delivered = self.partner.send_sms(msisdn, &code).await;
        self.metrics.record(delivered).await?;

        if !delivered {
            tracing::error!(
                phone = %phone.masked(),
                event = "sms_failed",
                "OTP SMS was not delivered"
            );
            return Err(DomainError::SmsDeliveryFailed);
        }

        tracing::info!(phone = %phone.masked(), event = "otp_sent", "OTP SMS sent");

        Ok(OtpIssued {
            phone: msisdn.to_string(),
            expires_in: self.config.code_ttl_secs,
            customer,
        })
    }

    /// Verify a code attempt against the stored OTP.
    ///
    /// A wrong attempt leaves the record in place so the correct code can
    /// still be used within the TTL; a correct attempt deletes it, making
    /// every code single-use. Deletion is atomic in the store, so a second
    /// concurrent verify of the same code observes `OtpExpired`.
    pub async fn verify_code(&self, phone: &PhoneNumber, attempt: &str) -> DomainResult<()> {
        let msisdn = phone.as_str();

        let stored = self
            .store
            .fetch_code(msisdn)
            .await
            .map_err(DomainError::store)?;

        let stored = match stored {
            Some(code) => code,
            None => {
                tracing::info!(
                    phone = %phone.masked(),
                    event = "otp_expired",
                    "no live OTP for number"
                );
                return Err(DomainError::OtpExpired);
            }
        };

        if !codes_match(&stored, attempt) {
            tracing::warn!(
                phone = %phone.masked(),
                event = "otp_mismatch",
                "OTP attempt does not match stored code"
            );
            return Err(DomainError::InvalidOtp);
        }

        self.store
            .delete_code(msisdn)
            .await
            .map_err(DomainError::store)?;

        tracing::info!(phone = %phone.masked(), event = "otp_verified", "OTP verified and consumed");

        // Best-effort audit trail; never blocks or fails the verification.
        let partner = Arc::clone(&self.partner);
        let audit_msisdn = msisdn.to_string();
        tokio::spawn(async move {
            partner
                .log_activity(&audit_msisdn, "otp_verification", "success")
                .await;
        });

        Ok(())
    }

    /// Today's usage counters.
    pub async fn usage_metrics(&self) -> DomainResult<crate::services::metrics::DailyMetrics> {
        self.metrics.read_today().await
    }
}

/// Constant-time code comparison; length mismatch short-circuits, which is
/// fine since the code length is public.
fn codes_match(stored: &str, attempt: &str) -> bool {
    stored.len() == attempt.len() && constant_time_eq(stored.as_bytes(), attempt.as_bytes())
}
