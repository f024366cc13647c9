//! HTTP client for the partner API
//!
//! Every call is signed per request (timestamp + HMAC header set), carries a
//! fixed timeout and is attempted exactly once. Transport failures and
//! non-2xx replies collapse into "no response": callers see an absent value,
//! never an error, and must treat absence as a definitive negative for this
//! attempt. Details are logged here, server-side only.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use otp_core::services::otp::traits::PartnerGateway;
use otp_core::services::otp::types::CustomerInfo;
use otp_shared::config::PartnerConfig;
use otp_shared::utils::phone::mask_phone;

use crate::partner::signature::sign_request;
use crate::InfrastructureError;

const VALIDATE_ENDPOINT: &str = "customer/validate";
const SMS_ENDPOINT: &str = "sms/send";
const ACTIVITY_ENDPOINT: &str = "activity/log";

/// Signed client for the FTTH partner API.
pub struct PartnerClient {
    http: reqwest::Client,
    config: PartnerConfig,
}

impl PartnerClient {
    pub fn new(config: PartnerConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Attach the auth header set and execute. `None` on any failure.
    async fn dispatch(&self, endpoint: &str, builder: reqwest::RequestBuilder) -> Option<Value> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_request(
            &self.config.api_secret,
            &timestamp,
            &self.config.api_key,
            endpoint,
        );

        let result = builder
            .header("FTTH-Api-Package", &self.config.package)
            .header("Key", &self.config.api_key)
            .header("Timestamp", timestamp)
            .header("Signature", signature)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!("partner API {} transport error: {}", endpoint, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("partner API {} returned {}", endpoint, status);
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                error!("partner API {} returned unparsable body: {}", endpoint, e);
                None
            }
        }
    }

    async fn post(&self, endpoint: &str, payload: &Value) -> Option<Value> {
        debug!("POST {}", endpoint);
        self.dispatch(endpoint, self.http.post(self.url(endpoint)).json(payload))
            .await
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Option<Value> {
        debug!("GET {}", endpoint);
        self.dispatch(endpoint, self.http.get(self.url(endpoint)).query(query))
            .await
    }
}

fn is_success(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some("success")
}

#[async_trait]
impl PartnerGateway for PartnerClient {
    async fn validate_customer(&self, phone: &str) -> Option<CustomerInfo> {
        let body = self.get(VALIDATE_ENDPOINT, &[("msisdn", phone)]).await?;
        if !is_success(&body) {
            return None;
        }

        let data = body.get("data").cloned().unwrap_or(Value::Null);
        let customer = serde_json::from_value(data).unwrap_or_default();
        Some(customer)
    }

    async fn send_sms(&self, phone: &str, code: &str) -> bool {
        let message = format!(
            "Kode OTP Anda: {}. Berlaku 5 menit. JANGAN BERIKAN kode ini kepada siapapun.",
            code
        );
        let payload = json!({
            "msisdn": phone,
            "message": message,
            "sms_type": "transactional",
            "sender_id": "MYXL",
        });

        match self.post(SMS_ENDPOINT, &payload).await {
            Some(body) if is_success(&body) => {
                info!("SMS sent to {}", mask_phone(phone));
                true
            }
            _ => {
                error!("failed to send SMS to {}", mask_phone(phone));
                false
            }
        }
    }

    async fn log_activity(&self, phone: &str, activity: &str, status: &str) {
        let payload = json!({
            "msisdn": phone,
            "activity": activity,
            "status": status,
        });

        if self.post(ACTIVITY_ENDPOINT, &payload).await.is_none() {
            warn!(
                "activity log not delivered for {} ({})",
                mask_phone(phone),
                activity
            );
        }
    }
}
