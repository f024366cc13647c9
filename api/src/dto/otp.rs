use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/otp/request`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestOtpBody {
    /// Raw phone number in any common format (08xx, 628xx, +628xx)
    #[validate(length(min = 1))]
    pub phone: String,
}

/// Body of `POST /api/otp/verify`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpBody {
    /// Raw phone number in any common format
    #[validate(length(min = 1))]
    pub phone: String,

    /// 6-digit code attempt
    #[validate(length(min = 1))]
    pub otp: String,
}
