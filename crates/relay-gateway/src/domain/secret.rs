//! # Shared Secret
//!
//! Wrapper for the HMAC key that zeroizes memory on drop.
//!
//! ## Security
//!
//! The key never appears in `Debug` output and has no serde support, so it
//! cannot leak through logs or serialized configuration.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The process-wide HMAC secret.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    inner: Vec<u8>,
}

impl SecretKey {
    /// Create a secret from raw key bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Get the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(***)")
    }
}
