//! Configuration types for a benchmark run
//!
//! [`BenchConfig`] holds values as they arrive from the command line (signed,
//! unchecked). [`BenchConfig::validate`] turns them into [`SequenceParams`],
//! rejecting anything outside the workloads' domain.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{SearchLimits, SequenceParams, MAX_DIFFICULTY};
use crate::error::{Result, WorkloadError};

/// Raw run configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Matrix side length (`-n`)
    pub dimension: i64,

    /// Branch threshold
    pub threshold: i64,

    /// Output file path. Reported in the summary, never written.
    pub output_path: PathBuf,

    /// Proof-of-work difficulty (leading zero hex digits)
    pub difficulty: i64,

    /// Proof-of-work payload
    pub block_data: String,

    /// Exclusive bound for the prime enumeration
    pub max_primes: i64,

    /// Proof-of-work attempt budget (unbounded when `None`)
    pub max_attempts: Option<i64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dimension: crate::DEFAULT_DIMENSION as i64,
            threshold: crate::DEFAULT_THRESHOLD,
            output_path: PathBuf::from(crate::DEFAULT_OUTPUT_PATH),
            difficulty: crate::DEFAULT_DIFFICULTY as i64,
            block_data: crate::DEFAULT_BLOCK_DATA.to_string(),
            max_primes: crate::DEFAULT_MAX_PRIMES as i64,
            max_attempts: None,
        }
    }
}

impl BenchConfig {
    /// Validate and convert into sequencer parameters.
    ///
    /// # Returns
    ///
    /// Returns `Err(InvalidArgument)` if:
    /// - dimension, prime bound, difficulty or attempt budget is negative
    /// - difficulty exceeds the digest length
    pub fn validate(&self) -> Result<SequenceParams> {
        let dimension = non_negative("dimension", self.dimension)?;
        let dimension = usize::try_from(dimension)
            .map_err(|_| WorkloadError::invalid(format!("dimension {dimension} too large")))?;

        let difficulty = non_negative("difficulty", self.difficulty)? as usize;
        if difficulty > MAX_DIFFICULTY {
            return Err(WorkloadError::invalid(format!(
                "difficulty must be <= {MAX_DIFFICULTY}, got {difficulty}"
            )));
        }

        let max_primes = non_negative("max-primes", self.max_primes)?;

        let mut limits = SearchLimits::unbounded();
        if let Some(max_attempts) = self.max_attempts {
            limits = limits.with_max_attempts(non_negative("max-attempts", max_attempts)?);
        }

        Ok(SequenceParams {
            dimension,
            threshold: self.threshold,
            block_data: self.block_data.clone(),
            difficulty,
            max_primes,
            limits,
        })
    }
}

fn non_negative(name: &str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| WorkloadError::invalid(format!("{name} must be >= 0, got {value}")))
}
