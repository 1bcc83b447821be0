//! # Render Relay Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── exploits/         # Attack simulations against the HMAC gate
//! │   └── signature_forgery.rs
//! │
//! └── integration/      # Real server over TCP, driven by an HTTP client
//!     └── http_surface.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p relay-tests
//!
//! # By category
//! cargo test -p relay-tests integration::
//! cargo test -p relay-tests exploits::
//! ```

pub mod exploits;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Sign `body` the way a client would, without going through the gateway's
/// own signer.
pub fn client_signature(secret: &[u8], body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}
