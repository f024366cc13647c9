use actix_web::{web, HttpResponse};

use otp_core::services::metrics::MetricsStore;
use otp_core::services::otp::{OtpStore, PartnerGateway};
use otp_shared::types::response::ApiResponse;

use crate::handlers::error::error_response;
use crate::state::AppState;

/// Handler for `GET /api/otp/metrics`
///
/// Today's issuance counters; all zeroes before the first request of the
/// day.
pub async fn usage_metrics<S, P, M>(state: web::Data<AppState<S, P, M>>) -> HttpResponse
where
    S: OtpStore + 'static,
    P: PartnerGateway + 'static,
    M: MetricsStore + 'static,
{
    match state.otp.usage_metrics().await {
        Ok(metrics) => HttpResponse::Ok().json(ApiResponse::success(metrics)),
        Err(error) => {
            log::error!("failed to read usage metrics: {}", error);
            error_response(&error)
        }
    }
}
