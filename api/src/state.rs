//! Shared application state

use std::sync::Arc;

use otp_core::services::metrics::MetricsStore;
use otp_core::services::otp::{OtpService, OtpStore, PartnerGateway};

/// Application state handed to every handler.
pub struct AppState<S: OtpStore, P: PartnerGateway, M: MetricsStore> {
    pub otp: Arc<OtpService<S, P, M>>,
}
