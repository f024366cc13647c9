//! Route table
//!
//! Registration is generic over the store/partner seams so integration
//! tests can mount the same routes over in-memory fakes.

use actix_web::{error, web, HttpRequest, HttpResponse};

use otp_core::services::metrics::MetricsStore;
use otp_core::services::otp::{OtpStore, PartnerGateway};
use otp_shared::types::response::ErrorBody;

use crate::routes;

/// Register the full HTTP surface on a service config.
pub fn configure_api<S, P, M>(cfg: &mut web::ServiceConfig)
where
    S: OtpStore + 'static,
    P: PartnerGateway + 'static,
    M: MetricsStore + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(routes::health::health))
        .service(
            web::scope("/api/otp")
                .route(
                    "/request",
                    web::post().to(routes::otp::request::request_otp::<S, P, M>),
                )
                .route(
                    "/verify",
                    web::post().to(routes::otp::verify::verify_otp::<S, P, M>),
                )
                .route(
                    "/metrics",
                    web::get().to(routes::otp::metrics::usage_metrics::<S, P, M>),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Map body deserialization failures (missing fields, malformed JSON) to
/// the endpoint's required-parameter error code.
fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let (code, message) = if req.path().ends_with("/verify") {
        ("MISSING_PARAMETERS", "Phone number and OTP are required")
    } else {
        ("INVALID_PHONE", "Phone number is required")
    };

    log::warn!("malformed request body on {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ErrorBody::new(code, message));
    error::InternalError::from_response(err, response).into()
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
