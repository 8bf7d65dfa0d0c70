//! Session cookie signing key

use sha2::{Digest, Sha512};

/// Cookie signing keys must be 64 bytes; stretch an arbitrary secret to that length.
pub fn derive_cookie_key(secret: &str) -> [u8; 64] {
    let digest = Sha512::digest(secret.as_bytes());
    let mut key = [0u8; 64];
    key.copy_from_slice(&digest);
    key
}
