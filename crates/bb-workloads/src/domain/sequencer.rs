//! # Branch Decision State Machine
//!
//! ```text
//! Start ──trace──→ ComputedTrace ──trace > threshold──→ BranchA ──→ Done
//!                               └──otherwise─────────→ BranchB ──→ Done
//! ```
//!
//! Linear, no loops. `trace == threshold` takes Branch B.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::pow::{ProofOfWork, SearchLimits};
use crate::error::{Result, WorkloadError};

/// Which workload the sequencer ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Proof-of-work search (trace above threshold)
    A,
    /// Prime enumeration (trace at or below threshold)
    B,
}

impl Branch {
    /// Single-letter label
    pub fn label(self) -> &'static str {
        match self {
            Branch::A => "A",
            Branch::B => "B",
        }
    }

    /// State the sequencer enters to run this branch
    pub fn state(self) -> SequenceState {
        match self {
            Branch::A => SequenceState::BranchA,
            Branch::B => SequenceState::BranchB,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the branch for a computed trace. Ties go to [`Branch::B`].
#[inline]
pub fn select_branch(trace: i64, threshold: i64) -> Branch {
    if trace > threshold {
        Branch::A
    } else {
        Branch::B
    }
}

/// Sequencer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// Nothing computed yet
    Start,
    /// Matrix trace available
    ComputedTrace,
    /// Running the proof-of-work search
    BranchA,
    /// Running the prime enumeration
    BranchB,
    /// Branch finished, elapsed time recorded
    Done,
}

impl SequenceState {
    /// Whether `next` directly follows `self`
    pub fn can_transition_to(self, next: SequenceState) -> bool {
        use SequenceState::*;
        matches!(
            (self, next),
            (Start, ComputedTrace)
                | (ComputedTrace, BranchA)
                | (ComputedTrace, BranchB)
                | (BranchA, Done)
                | (BranchB, Done)
        )
    }

    /// Move to `next`, failing on a transition the machine does not allow
    pub fn next(self, next: SequenceState) -> Result<SequenceState> {
        if self.can_transition_to(next) {
            tracing::trace!(from = %self, to = %next, "Sequencer transition");
            Ok(next)
        } else {
            Err(WorkloadError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl fmt::Display for SequenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceState::Start => "Start",
            SequenceState::ComputedTrace => "ComputedTrace",
            SequenceState::BranchA => "BranchA",
            SequenceState::BranchB => "BranchB",
            SequenceState::Done => "Done",
        };
        f.write_str(name)
    }
}

/// Inputs to one sequencer run
#[derive(Debug, Clone)]
pub struct SequenceParams {
    /// Matrix side length
    pub dimension: usize,
    /// Trace threshold; strictly greater selects Branch A
    pub threshold: i64,
    /// Proof-of-work payload
    pub block_data: String,
    /// Required leading zero hex digits
    pub difficulty: usize,
    /// Exclusive upper bound for the prime enumeration
    pub max_primes: u64,
    /// Bounds on the proof-of-work search
    pub limits: SearchLimits,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            dimension: crate::DEFAULT_DIMENSION,
            threshold: crate::DEFAULT_THRESHOLD,
            block_data: crate::DEFAULT_BLOCK_DATA.to_string(),
            difficulty: crate::DEFAULT_DIFFICULTY,
            max_primes: crate::DEFAULT_MAX_PRIMES,
            limits: SearchLimits::default(),
        }
    }
}

/// What the selected branch produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BranchWork {
    /// Branch A result
    ProofOfWork(ProofOfWork),
    /// Branch B result, summarized
    Primes {
        /// Number of primes found
        count: usize,
        /// Largest prime found
        largest: Option<u64>,
    },
}

impl BranchWork {
    /// Summarize a prime list
    pub fn from_primes(primes: &[u64]) -> Self {
        BranchWork::Primes {
            count: primes.len(),
            largest: primes.last().copied(),
        }
    }
}

/// Result of one sequencer run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOutcome {
    /// Branch that ran
    pub branch: Branch,
    /// Wall-clock time from Start to Done
    pub elapsed: Duration,
    /// Computed matrix trace
    pub trace: i64,
    /// Threshold it was compared against
    pub threshold: i64,
    /// Branch output
    pub work: BranchWork,
}
