//! Domain error types
//!
//! One variant per business failure. The HTTP layer maps each variant to a
//! status code and a wire-level error code; `Display` strings here are the
//! client-facing messages, so store details only appear in the `Store`
//! variant, which the HTTP layer never forwards verbatim.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the OTP request/verify state machine.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Phone number is required")]
    PhoneRequired,

    #[error("Phone number must be an Indonesian mobile number (08xx or 628xx)")]
    InvalidPhoneFormat,

    #[error("Too many requests for this number. Please try again later")]
    RateLimited,

    #[error("Number is not a registered subscriber")]
    CustomerNotFound,

    #[error("Failed to send SMS. Please try again")]
    SmsDeliveryFailed,

    #[error("Phone number and OTP are required")]
    MissingParameters,

    #[error("OTP is invalid or has expired")]
    OtpExpired,

    #[error("OTP does not match")]
    InvalidOtp,

    #[error("state store failure: {message}")]
    Store { message: String },
}

impl DomainError {
    /// Stable machine-readable code carried in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PhoneRequired => "INVALID_PHONE",
            Self::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            Self::RateLimited => "RATE_LIMITED",
            Self::CustomerNotFound => "INVALID_CUSTOMER",
            Self::SmsDeliveryFailed => "SMS_FAILED",
            Self::MissingParameters => "MISSING_PARAMETERS",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::InvalidOtp => "INVALID_OTP",
            Self::Store { .. } => "INTERNAL_ERROR",
        }
    }

    /// Wrap a store-layer failure.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(DomainError::PhoneRequired.code(), "INVALID_PHONE");
        assert_eq!(DomainError::InvalidPhoneFormat.code(), "INVALID_PHONE_FORMAT");
        assert_eq!(DomainError::RateLimited.code(), "RATE_LIMITED");
        assert_eq!(DomainError::CustomerNotFound.code(), "INVALID_CUSTOMER");
        assert_eq!(DomainError::SmsDeliveryFailed.code(), "SMS_FAILED");
        assert_eq!(DomainError::OtpExpired.code(), "OTP_EXPIRED");
        assert_eq!(DomainError::InvalidOtp.code(), "INVALID_OTP");
        assert_eq!(DomainError::store("boom").code(), "INTERNAL_ERROR");
    }
}
