//! In-memory test doubles for the store and partner seams
//!
//! TTLs are simulated with `tokio::time::Instant`, so tests running under
//! `start_paused` can advance the clock deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::{Duration, Instant};

use crate::services::metrics::{MetricCounter, MetricsStore};
use crate::services::otp::traits::{OtpStore, PartnerGateway};
use crate::services::otp::types::CustomerInfo;

struct StoredCode {
    code: String,
    expires_at: Instant,
}

/// In-memory store implementing both `OtpStore` and `MetricsStore`.
#[derive(Default)]
pub struct MockStore {
    codes: Mutex<HashMap<String, StoredCode>>,
    throttles: Mutex<HashMap<String, Instant>>,
    counters: Mutex<HashMap<String, i64>>,
    /// When set, every operation fails like an unreachable store.
    pub unavailable: AtomicBool,
}

impl MockStore {
    fn check_available(&self) -> Result<(), String> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err("store unreachable".to_string())
        } else {
            Ok(())
        }
    }

    pub fn stored_code(&self, phone: &str) -> Option<String> {
        self.codes
            .lock()
            .unwrap()
            .get(phone)
            .map(|stored| stored.code.clone())
    }
}

#[async_trait]
impl OtpStore for MockStore {
    async fn store_code(&self, phone: &str, code: &str, ttl_secs: u64) -> Result<(), String> {
        self.check_available()?;
        self.codes.lock().unwrap().insert(
            phone.to_string(),
            StoredCode {
                code: code.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_secs),
            },
        );
        Ok(())
    }

    async fn fetch_code(&self, phone: &str) -> Result<Option<String>, String> {
        self.check_available()?;
        let mut codes = self.codes.lock().unwrap();
        if let Some(stored) = codes.get(phone) {
            if stored.expires_at > Instant::now() {
                return Ok(Some(stored.code.clone()));
            }
        }
        codes.remove(phone);
        Ok(None)
    }

    async fn delete_code(&self, phone: &str) -> Result<bool, String> {
        self.check_available()?;
        Ok(self.codes.lock().unwrap().remove(phone).is_some())
    }

    async fn throttle_active(&self, phone: &str) -> Result<bool, String> {
        self.check_available()?;
        let mut throttles = self.throttles.lock().unwrap();
        if let Some(expires_at) = throttles.get(phone) {
            if *expires_at > Instant::now() {
                return Ok(true);
            }
        }
        throttles.remove(phone);
        Ok(false)
    }

    async fn claim_throttle(&self, phone: &str, window_secs: u64) -> Result<bool, String> {
        self.check_available()?;
        let mut throttles = self.throttles.lock().unwrap();
        let now = Instant::now();
        if matches!(throttles.get(phone), Some(expires_at) if *expires_at > now) {
            return Ok(false);
        }
        throttles.insert(phone.to_string(), now + Duration::from_secs(window_secs));
        Ok(true)
    }
}

#[async_trait]
impl MetricsStore for MockStore {
    async fn incr_metric(&self, date: &str, counter: MetricCounter) -> Result<i64, String> {
        self.check_available()?;
        let mut counters = self.counters.lock().unwrap();
        let value = counters
            .entry(format!("{}:{}", date, counter.as_str()))
            .or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn read_metric(&self, date: &str, counter: MetricCounter) -> Result<u64, String> {
        self.check_available()?;
        Ok(self
            .counters
            .lock()
            .unwrap()
            .get(&format!("{}:{}", date, counter.as_str()))
            .copied()
            .unwrap_or(0) as u64)
    }
}

/// Scripted partner gateway.
pub struct MockPartner {
    /// Whether `validate_customer` answers positively
    pub registered: AtomicBool,
    /// Whether `send_sms` reports delivery
    pub sms_ok: AtomicBool,
    /// Every SMS handed over: (phone, code)
    pub sent: Mutex<Vec<(String, String)>>,
    /// Every audit call: (phone, activity, status)
    pub activities: Mutex<Vec<(String, String, String)>>,
}

impl Default for MockPartner {
    fn default() -> Self {
        Self {
            registered: AtomicBool::new(true),
            sms_ok: AtomicBool::new(true),
            sent: Mutex::new(Vec::new()),
            activities: Mutex::new(Vec::new()),
        }
    }
}

impl MockPartner {
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl PartnerGateway for MockPartner {
    async fn validate_customer(&self, _phone: &str) -> Option<CustomerInfo> {
        if self.registered.load(Ordering::SeqCst) {
            Some(CustomerInfo {
                name: "Test Subscriber".to_string(),
                package: "Home 50".to_string(),
            })
        } else {
            None
        }
    }

    async fn send_sms(&self, phone: &str, code: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_string(), code.to_string()));
        self.sms_ok.load(Ordering::SeqCst)
    }

    async fn log_activity(&self, phone: &str, activity: &str, status: &str) {
        self.activities.lock().unwrap().push((
            phone.to_string(),
            activity.to_string(),
            status.to_string(),
        ));
    }
}
