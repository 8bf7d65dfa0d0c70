//! Random tokens (throwaway passwords, generated secrets)

use rand::Rng;

/// 32 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let token: [u8; 32] = rand::rng().random();
    hex::encode(token)
}
