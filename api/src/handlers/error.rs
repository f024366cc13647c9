//! Domain error to HTTP response mapping
//!
//! The single point where `DomainError` variants become wire responses.
//! Store failures keep their detail in server logs only; the client sees a
//! generic `INTERNAL_ERROR`.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use otp_core::errors::DomainError;
use otp_shared::types::response::ErrorBody;

/// Convert a domain error into its wire response.
pub fn error_response(error: &DomainError) -> HttpResponse {
    let status = match error {
        DomainError::PhoneRequired
        | DomainError::InvalidPhoneFormat
        | DomainError::CustomerNotFound
        | DomainError::MissingParameters => StatusCode::BAD_REQUEST,
        DomainError::OtpExpired | DomainError::InvalidOtp => StatusCode::UNAUTHORIZED,
        DomainError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        DomainError::SmsDeliveryFailed | DomainError::Store { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let message = match error {
        DomainError::Store { .. } => "Internal error. Please try again later".to_string(),
        other => other.to_string(),
    };

    HttpResponse::build(status).json(ErrorBody::new(error.code(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(error_response(&DomainError::PhoneRequired).status(), 400);
        assert_eq!(error_response(&DomainError::InvalidPhoneFormat).status(), 400);
        assert_eq!(error_response(&DomainError::CustomerNotFound).status(), 400);
        assert_eq!(error_response(&DomainError::MissingParameters).status(), 400);
        assert_eq!(error_response(&DomainError::OtpExpired).status(), 401);
        assert_eq!(error_response(&DomainError::InvalidOtp).status(), 401);
        assert_eq!(error_response(&DomainError::RateLimited).status(), 429);
        assert_eq!(error_response(&DomainError::SmsDeliveryFailed).status(), 500);
        assert_eq!(error_response(&DomainError::store("down")).status(), 500);
    }

    #[actix_web::test]
    async fn test_store_detail_is_not_exposed() {
        let response = error_response(&DomainError::store("redis at 10.0.0.3 refused"));
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("10.0.0.3"));
        assert!(body.contains("INTERNAL_ERROR"));
    }
}
