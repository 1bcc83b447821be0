//! # Request Authentication
//!
//! HMAC-SHA256 signatures over raw request bodies.
//!
//! ## Security Properties
//!
//! - **Body-exact**: the digest is computed over the bytes exactly as received
//! - **Constant-time**: signatures are compared with `subtle::ConstantTimeEq`
//! - **No work without a header**: a missing signature fails before any HMAC
//!   computation

use crate::domain::secret::SecretKey;
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the base64 signature (header lookup is case-insensitive).
pub const SIGNATURE_HEADER: &str = "x-hmac-sha256";

/// Verifies request signatures against the shared secret.
#[derive(Clone, Debug)]
pub struct Authenticator {
    secret: Arc<SecretKey>,
}

impl Authenticator {
    pub fn new(secret: SecretKey) -> Self {
        Self {
            secret: Arc::new(secret),
        }
    }

    /// Check `signature` against the body.
    ///
    /// # Returns
    ///
    /// - `false` if no signature was supplied (no HMAC is computed)
    /// - `true` iff `signature` equals `base64(HMAC-SHA256(secret, body))`
    pub fn authenticate(&self, body: &[u8], signature: Option<&str>) -> bool {
        let Some(signature) = signature else {
            return false;
        };

        match self.expected_signature(body) {
            Some(expected) => constant_time_compare(&expected, signature),
            None => false,
        }
    }

    /// Produce the signature a caller must send for `body`.
    pub fn sign(&self, body: &[u8]) -> String {
        self.expected_signature(body).unwrap_or_default()
    }

    fn expected_signature(&self, body: &[u8]) -> Option<String> {
        // Any key length is accepted.
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes()).ok()?;
        mac.update(body);
        Some(B64.encode(mac.finalize().into_bytes()))
    }
}

/// Constant-time string comparison to prevent timing attacks
///
/// The length check may short-circuit: a SHA-256 signature is always 44
/// base64 characters, so length is public.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    use subtle::ConstantTimeEq;

    a.as_bytes().ct_eq(b.as_bytes()).into()
}
