//! Redis implementation of the core store seams
//!
//! Key scheme, all derived from the canonical phone number or the local
//! date:
//! - `otp:{phone}` - the live code, SETEX with the configured TTL
//! - `otp_rate:{phone}` - per-number cooldown flag, SET NX EX
//! - `otp:stats:{date}:{counter}` - daily counters, INCR without expiry

use async_trait::async_trait;
use tracing::debug;

use otp_core::services::metrics::{MetricCounter, MetricsStore};
use otp_core::services::otp::traits::OtpStore;
use otp_shared::utils::phone::mask_phone;

use crate::cache::RedisClient;

/// `OtpStore` + `MetricsStore` over Redis.
#[derive(Clone)]
pub struct RedisOtpStore {
    client: RedisClient,
}

impl RedisOtpStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn code_key(phone: &str) -> String {
        format!("otp:{}", phone)
    }

    fn throttle_key(phone: &str) -> String {
        format!("otp_rate:{}", phone)
    }

    fn metric_key(date: &str, counter: MetricCounter) -> String {
        format!("otp:stats:{}:{}", date, counter.as_str())
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn store_code(&self, phone: &str, code: &str, ttl_secs: u64) -> Result<(), String> {
        debug!("storing OTP for {}", mask_phone(phone));
        self.client
            .set_with_expiry(&Self::code_key(phone), code, ttl_secs)
            .await
            .map_err(|e| e.to_string())
    }

    async fn fetch_code(&self, phone: &str) -> Result<Option<String>, String> {
        self.client
            .get(&Self::code_key(phone))
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete_code(&self, phone: &str) -> Result<bool, String> {
        debug!("consuming OTP for {}", mask_phone(phone));
        self.client
            .delete(&Self::code_key(phone))
            .await
            .map_err(|e| e.to_string())
    }

    async fn throttle_active(&self, phone: &str) -> Result<bool, String> {
        self.client
            .exists(&Self::throttle_key(phone))
            .await
            .map_err(|e| e.to_string())
    }

    async fn claim_throttle(&self, phone: &str, window_secs: u64) -> Result<bool, String> {
        self.client
            .set_if_absent_with_expiry(&Self::throttle_key(phone), "1", window_secs)
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl MetricsStore for RedisOtpStore {
    async fn incr_metric(&self, date: &str, counter: MetricCounter) -> Result<i64, String> {
        self.client
            .increment(&Self::metric_key(date, counter), None)
            .await
            .map_err(|e| e.to_string())
    }

    async fn read_metric(&self, date: &str, counter: MetricCounter) -> Result<u64, String> {
        let value = self
            .client
            .get(&Self::metric_key(date, counter))
            .await
            .map_err(|e| e.to_string())?;
        Ok(value.and_then(|v| v.parse().ok()).unwrap_or(0))
    }
}
