//! OTP code generation

use rand::{rngs::OsRng, RngCore};

/// Length of a generated code in decimal digits.
pub const CODE_LENGTH: usize = 6;

/// Draw a zero-padded 6-digit code from the OS CSPRNG.
///
/// The modulo bias over 10^6 is negligible for a rate-limited, short-lived
/// code.
pub fn generate_code() -> String {
    let mut bytes = [0u8; 4];
    OsRng.fill_bytes(&mut bytes);
    let num = u32::from_le_bytes(bytes);
    format!("{:06}", num % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_ascii_digits() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()), "code: {}", code);
        }
    }

    #[test]
    fn test_codes_vary() {
        let first = generate_code();
        let distinct = (0..50).map(|_| generate_code()).any(|code| code != first);
        assert!(distinct);
    }
}
