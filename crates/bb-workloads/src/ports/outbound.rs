//! Outbound ports (driven side - SPI)

use crate::domain::{Branch, ProofOfWork, SearchLimits};
use crate::error::Result;

/// Port: the three numeric workloads the sequencer drives
pub trait Workloads {
    /// Trace of the product of two random `dimension`×`dimension` matrices
    fn matrix_trace(&mut self, dimension: usize) -> Result<i64>;

    /// First nonce whose digest has `difficulty` leading zeros
    fn proof_of_work(
        &mut self,
        payload: &str,
        difficulty: usize,
        limits: &SearchLimits,
    ) -> Result<ProofOfWork>;

    /// Primes in `[2, max)`
    fn find_primes(&mut self, max: u64) -> Vec<u64>;
}

/// Port: announce the selected branch before it runs
pub trait BranchNotifier {
    /// Called once per run, after the trace is known
    fn branch_selected(&mut self, branch: Branch, trace: i64, threshold: i64);
}

impl<T: Workloads + ?Sized> Workloads for &mut T {
    fn matrix_trace(&mut self, dimension: usize) -> Result<i64> {
        (**self).matrix_trace(dimension)
    }

    fn proof_of_work(
        &mut self,
        payload: &str,
        difficulty: usize,
        limits: &SearchLimits,
    ) -> Result<ProofOfWork> {
        (**self).proof_of_work(payload, difficulty, limits)
    }

    fn find_primes(&mut self, max: u64) -> Vec<u64> {
        (**self).find_primes(max)
    }
}

impl<T: BranchNotifier + ?Sized> BranchNotifier for &mut T {
    fn branch_selected(&mut self, branch: Branch, trace: i64, threshold: i64) {
        (**self).branch_selected(branch, trace, threshold)
    }
}
