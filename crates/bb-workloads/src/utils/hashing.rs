//! Hashing utilities for the proof-of-work workload
//!
//! The search hashes `payload ++ decimal(nonce)` with SHA-256 and compares the
//! lowercase hex digest against a prefix of `'0'` characters.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest
pub const SHA256_HEX_LEN: usize = 64;

/// Compute SHA-256 hash of data
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash `payload` followed by the decimal representation of `nonce`,
/// returning the lowercase hex digest.
pub fn nonce_digest_hex(payload: &str, nonce: u64) -> String {
    let mut data = String::with_capacity(payload.len() + 20);
    data.push_str(payload);
    data.push_str(&nonce.to_string());
    hex::encode(sha256(data.as_bytes()))
}

/// Check if a hex digest starts with `difficulty` `'0'` characters
#[inline]
pub fn has_zero_prefix(digest_hex: &str, difficulty: usize) -> bool {
    digest_hex.len() >= difficulty && digest_hex.bytes().take(difficulty).all(|b| b == b'0')
}
