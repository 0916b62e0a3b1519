//! CPU workload backend
//!
//! Runs every workload synchronously on the calling thread. The RNG used for
//! matrix generation is owned by the backend, so a seeded RNG makes the
//! branch decision reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{self, ProofOfWork, SearchLimits};
use crate::error::Result;
use crate::ports::Workloads;

/// Single-threaded workload implementation
#[derive(Debug, Clone)]
pub struct CpuWorkloads<R = StdRng> {
    rng: R,
}

impl CpuWorkloads<StdRng> {
    /// Backend seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Backend with a deterministic seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CpuWorkloads<R> {
    /// Backend drawing matrix entries from `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Workloads for CpuWorkloads<R> {
    fn matrix_trace(&mut self, dimension: usize) -> Result<i64> {
        let trace = domain::compute_trace(dimension, &mut self.rng)?;
        tracing::debug!(dimension, trace, "Matrix trace computed");
        Ok(trace)
    }

    fn proof_of_work(
        &mut self,
        payload: &str,
        difficulty: usize,
        limits: &SearchLimits,
    ) -> Result<ProofOfWork> {
        let proof = domain::simulate_proof_of_work(payload, difficulty, limits)?;
        tracing::debug!(
            nonce = proof.nonce,
            attempts = proof.attempts,
            "Proof-of-work search finished"
        );
        Ok(proof)
    }

    fn find_primes(&mut self, max: u64) -> Vec<u64> {
        let primes = domain::find_primes(max);
        tracing::debug!(max, count = primes.len(), "Prime enumeration finished");
        primes
    }
}
