//! Canonical subscriber phone number

use std::fmt;

use otp_shared::utils::phone::{is_mobile_subscriber, mask_phone, normalize_phone};

use crate::errors::DomainError;

/// A normalized Indonesian mobile number.
///
/// Can only be constructed through [`PhoneNumber::parse`], so holding one
/// guarantees the digits-only `628…` canonical form used as the key for every
/// stateful operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize raw input and validate the mobile subscriber prefix.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_phone(raw);
        if !is_mobile_subscriber(&normalized) {
            return Err(DomainError::InvalidPhoneFormat);
        }
        Ok(Self(normalized))
    }

    /// Canonicalize without the mobile-prefix gate.
    ///
    /// Used on the verification path, where an unknown number should fall
    /// through to a store lookup miss rather than a format error.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_phone(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for log lines.
    pub fn masked(&self) -> String {
        mask_phone(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_local_format() {
        let phone = PhoneNumber::parse("081234567890").unwrap();
        assert_eq!(phone.as_str(), "6281234567890");
    }

    #[test]
    fn test_parse_rejects_non_mobile() {
        assert!(matches!(
            PhoneNumber::parse("02112345678"),
            Err(DomainError::InvalidPhoneFormat)
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(PhoneNumber::parse("").is_err());
    }

    #[test]
    fn test_normalize_skips_mobile_gate() {
        let phone = PhoneNumber::normalize("02112345678");
        assert_eq!(phone.as_str(), "622112345678");
    }

    #[test]
    fn test_masked() {
        let phone = PhoneNumber::parse("081234567890").unwrap();
        assert_eq!(phone.masked(), "***7890");
    }
}
