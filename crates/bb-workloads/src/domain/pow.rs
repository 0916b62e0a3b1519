//! # Proof-of-Work Simulation
//!
//! Brute-force nonce search: hash `payload ++ decimal(nonce)` for
//! nonce = 0, 1, 2, ... until the hex digest starts with `difficulty` zeros.
//! Expected attempts grow as 16^difficulty.
//!
//! The search is unbounded unless [`SearchLimits`] sets an attempt budget or a
//! cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkloadError};
use crate::utils::hashing::{has_zero_prefix, nonce_digest_hex, SHA256_HEX_LEN};

/// Nonces between two reads of the cancellation flag
pub const CANCEL_POLL_INTERVAL: u64 = 10_000;

/// Largest difficulty that can ever be satisfied
pub const MAX_DIFFICULTY: usize = SHA256_HEX_LEN;

/// A nonce and the digest it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOfWork {
    /// Lowercase hex SHA-256 digest of `payload ++ nonce`
    pub digest: String,
    /// Winning nonce
    pub nonce: u64,
    /// Hashes computed, including the winning one
    pub attempts: u64,
}

/// Optional bounds on the nonce search. Default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Stop after this many hashes
    pub max_attempts: Option<u64>,
    /// Stop when this flag becomes `true`
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// No bounds
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bound the search to `max_attempts` hashes
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Stop the search once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Search for the first nonce whose digest has `difficulty` leading zeros.
pub fn simulate_proof_of_work(
    payload: &str,
    difficulty: usize,
    limits: &SearchLimits,
) -> Result<ProofOfWork> {
    if difficulty > MAX_DIFFICULTY {
        return Err(WorkloadError::invalid(format!(
            "difficulty {difficulty} exceeds digest length {MAX_DIFFICULTY}"
        )));
    }

    let mut nonce: u64 = 0;
    loop {
        if nonce % CANCEL_POLL_INTERVAL == 0 && limits.is_cancelled() {
            tracing::warn!(attempts = nonce, "Proof-of-work search cancelled");
            return Err(WorkloadError::Cancelled { attempts: nonce });
        }
        if limits.max_attempts.is_some_and(|max| nonce >= max) {
            tracing::warn!(attempts = nonce, "Proof-of-work attempt budget exhausted");
            return Err(WorkloadError::SearchExhausted { attempts: nonce });
        }

        let digest = nonce_digest_hex(payload, nonce);
        if has_zero_prefix(&digest, difficulty) {
            tracing::debug!(nonce, difficulty, %digest, "Proof-of-work found");
            return Ok(ProofOfWork {
                digest,
                nonce,
                attempts: nonce + 1,
            });
        }

        nonce = nonce.checked_add(1).ok_or(WorkloadError::SearchExhausted {
            attempts: u64::MAX,
        })?;
    }
}

/// Recompute the digest for `proof.nonce` and check it matches and meets
/// `difficulty`.
pub fn verify_proof(payload: &str, difficulty: usize, proof: &ProofOfWork) -> bool {
    let digest = nonce_digest_hex(payload, proof.nonce);
    digest == proof.digest && has_zero_prefix(&digest, difficulty)
}
