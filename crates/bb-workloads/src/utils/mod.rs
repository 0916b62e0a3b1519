//! Utility modules for the workloads

pub mod hashing;

pub use hashing::{has_zero_prefix, nonce_digest_hex, sha256, SHA256_HEX_LEN};
