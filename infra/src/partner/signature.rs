//! Outbound request signing

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase-hex HMAC-SHA256 over `timestamp || api_key || endpoint`.
///
/// The partner verifies the same concatenation on its side; the timestamp
/// bounds replay and the endpoint binds the signature to one operation.
pub fn sign_request(secret: &str, timestamp: &str, api_key: &str, endpoint: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(timestamp.as_bytes());
    mac.update(api_key.as_bytes());
    mac.update(endpoint.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
