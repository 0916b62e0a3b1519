//! Domain layer: the three workloads and the branch decision.

pub mod matrix;
pub mod pow;
pub mod primes;
pub mod sequencer;

pub use matrix::{compute_trace, random_pair, trace_of_product, Matrix, MAX_ENTRY};
pub use pow::{
    simulate_proof_of_work, verify_proof, ProofOfWork, SearchLimits, CANCEL_POLL_INTERVAL,
    MAX_DIFFICULTY,
};
pub use primes::{find_primes, is_prime};
pub use sequencer::{
    select_branch, Branch, BranchOutcome, BranchWork, SequenceParams, SequenceState,
};
