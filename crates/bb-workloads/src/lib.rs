//! # Branch-Bench Workloads
//!
//! Three CPU-bound workloads and the sequencer that picks between them:
//!
//! | Workload | Complexity | Role |
//! |----------|------------|------|
//! | Matrix trace | O(n³) | Branch decision |
//! | Proof-of-work | ~16^difficulty hashes | Branch A |
//! | Prime enumeration | O(n^1.5) | Branch B |
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Adapters                                           │
//! │  - CpuWorkloads: synchronous, injected RNG          │
//! │  - TracingNotifier: branch notice via tracing       │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports                                              │
//! │  - Workloads, BranchNotifier                        │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (pure logic)                                │
//! │  - matrix, pow, primes                              │
//! │  - sequencer state machine                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Matrix entries**: always in `[0, 9]`
//! 2. **Primes**: strictly increasing, all below the bound
//! 3. **Proof-of-work**: digest has `difficulty` leading `'0'` hex characters
//! 4. **Tie-break**: `trace == threshold` runs Branch B
//!
//! ## Usage Example
//!
//! ```rust
//! use bb_workloads::{CpuWorkloads, SequenceParams, Sequencer, TracingNotifier};
//!
//! let mut sequencer = Sequencer::new(CpuWorkloads::seeded(7), TracingNotifier);
//! let params = SequenceParams {
//!     dimension: 3,
//!     threshold: 1_000_000,
//!     max_primes: 100,
//!     ..SequenceParams::default()
//! };
//! let outcome = sequencer.run(&params).unwrap();
//! assert_eq!(outcome.branch.label(), "B");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Port implementations
pub mod adapters;
/// Workloads and branch decision
pub mod domain;
/// Workload and notifier traits
pub mod ports;
/// Sequencer over the ports
pub mod service;
/// Hashing helpers
pub mod utils;

mod config;
mod error;

pub use adapters::{CpuWorkloads, TracingNotifier};
pub use config::BenchConfig;
pub use error::{Result, WorkloadError};
pub use service::Sequencer;

pub use domain::{
    compute_trace, find_primes, is_prime, random_pair, select_branch, simulate_proof_of_work,
    trace_of_product, verify_proof, Branch, BranchOutcome, BranchWork, Matrix, ProofOfWork,
    SearchLimits, SequenceParams, SequenceState,
};

pub use ports::{BranchNotifier, Workloads};

/// Default matrix side length
pub const DEFAULT_DIMENSION: usize = 100;

/// Default branch threshold
pub const DEFAULT_THRESHOLD: i64 = 10_000;

/// Default output path (declared, never written)
pub const DEFAULT_OUTPUT_PATH: &str = "salida.txt";

/// Default proof-of-work difficulty
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Default proof-of-work payload
pub const DEFAULT_BLOCK_DATA: &str = "block-data";

/// Default exclusive bound for the prime enumeration
pub const DEFAULT_MAX_PRIMES: u64 = 100_000;
