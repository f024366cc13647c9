use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::domain::PhoneNumber;
use otp_core::errors::DomainError;
use otp_core::services::metrics::MetricsStore;
use otp_core::services::otp::{OtpStore, PartnerGateway};
use otp_shared::types::response::ApiResponse;
use otp_shared::utils::phone::mask_phone;

use crate::dto::otp::RequestOtpBody;
use crate::handlers::error::error_response;
use crate::state::AppState;

/// Handler for `POST /api/otp/request`
///
/// Issues a fresh OTP for a registered subscriber number and sends it via
/// SMS. Terminal states map to `INVALID_PHONE`, `INVALID_PHONE_FORMAT`,
/// `RATE_LIMITED`, `INVALID_CUSTOMER`, `SMS_FAILED`, or success with the
/// code's remaining lifetime and the subscriber's name/package.
pub async fn request_otp<S, P, M>(
    state: web::Data<AppState<S, P, M>>,
    body: web::Json<RequestOtpBody>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    P: PartnerGateway + 'static,
    M: MetricsStore + 'static,
{
    let request_id = Uuid::new_v4();

    if body.validate().is_err() {
        return error_response(&DomainError::PhoneRequired);
    }

    let phone = match PhoneNumber::parse(&body.phone) {
        Ok(phone) => phone,
        Err(error) => {
            log::warn!(
                "[{}] rejected phone input {}",
                request_id,
                mask_phone(&body.phone)
            );
            return error_response(&error);
        }
    };

    log::info!("[{}] OTP requested for {}", request_id, phone.masked());

    match state.otp.request_code(&phone).await {
        Ok(issued) => HttpResponse::Ok().json(ApiResponse::with_message("OTP has been sent", issued)),
        Err(error) => {
            log::warn!(
                "[{}] OTP request failed for {}: {}",
                request_id,
                phone.masked(),
                error
            );
            error_response(&error)
        }
    }
}
