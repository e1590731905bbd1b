//! Opaque bearer-token generation and hashing.
//!
//! Tokens are random UUID v4 strings handed to the client exactly once, at
//! login. Only their SHA-256 hex digest is stored server-side so a database
//! leak does not compromise active sessions. Logout deletes the row whose
//! digest matches the presented token.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a cryptographically random bearer token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash should be persisted server-side.
pub fn generate_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a bearer token.
///
/// Use this to compare an incoming token against the stored hash.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_hash_matches() {
        let (plaintext, hash) = generate_token();

        // Re-hashing the same plaintext must produce the same digest.
        let rehashed = hash_token(&plaintext);
        assert_eq!(hash, rehashed, "hash of the same token must be stable");

        // Sanity: the hash should be a 64-char hex string (SHA-256).
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_tokens_are_unique() {
        let (a, _) = generate_token();
        let (b, _) = generate_token();
        assert_ne!(a, b);
    }
}
