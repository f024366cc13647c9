use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::domain::PhoneNumber;
use otp_core::errors::DomainError;
use otp_core::services::metrics::MetricsStore;
use otp_core::services::otp::{OtpStore, PartnerGateway};
use otp_shared::types::response::ApiResponse;

use crate::dto::otp::VerifyOtpBody;
use crate::handlers::error::error_response;
use crate::state::AppState;

/// Handler for `POST /api/otp/verify`
///
/// Checks a code attempt against the stored OTP. There is no format gate
/// here: an unknown or non-mobile number simply has no live code and
/// answers `OTP_EXPIRED`, indistinguishable from a real expiry.
pub async fn verify_otp<S, P, M>(
    state: web::Data<AppState<S, P, M>>,
    body: web::Json<VerifyOtpBody>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    P: PartnerGateway + 'static,
    M: MetricsStore + 'static,
{
    let request_id = Uuid::new_v4();

    if body.validate().is_err() {
        return error_response(&DomainError::MissingParameters);
    }

    let phone = PhoneNumber::normalize(&body.phone);

    log::info!("[{}] OTP verification for {}", request_id, phone.masked());

    match state.otp.verify_code(&phone, &body.otp).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only("OTP valid")),
        Err(error) => {
            log::warn!(
                "[{}] OTP verification failed for {}: {}",
                request_id,
                phone.masked(),
                error
            );
            error_response(&error)
        }
    }
}
