//! Sequencer Service
//!
//! Drives one run of the branch decision: compute the trace, announce the
//! branch, run exactly one workload, and time the whole sequence.

use std::time::Instant;

use tracing::{info, info_span};

use crate::adapters::{CpuWorkloads, TracingNotifier};
use crate::domain::{
    select_branch, Branch, BranchOutcome, BranchWork, SequenceParams, SequenceState,
};
use crate::error::Result;
use crate::ports::{BranchNotifier, Workloads};

/// Runs the trace → branch → workload sequence
pub struct Sequencer<W, N> {
    workloads: W,
    notifier: N,
}

impl Sequencer<CpuWorkloads, TracingNotifier> {
    /// CPU workloads seeded from OS entropy, notice logged via `tracing`
    pub fn with_defaults() -> Self {
        Self::new(CpuWorkloads::from_entropy(), TracingNotifier)
    }
}

impl<W: Workloads, N: BranchNotifier> Sequencer<W, N> {
    /// Create a sequencer over the given ports
    pub fn new(workloads: W, notifier: N) -> Self {
        Self {
            workloads,
            notifier,
        }
    }

    /// Run the sequence once.
    ///
    /// The elapsed time covers the trace computation and the selected branch.
    /// Errors from the workloads (oversized matrix, cancelled or exhausted
    /// proof-of-work search) are returned as-is.
    pub fn run(&mut self, params: &SequenceParams) -> Result<BranchOutcome> {
        let span = info_span!(
            "sequence",
            dimension = params.dimension,
            threshold = params.threshold
        );
        let _enter = span.enter();

        let started = Instant::now();
        let state = SequenceState::Start;

        let trace = self.workloads.matrix_trace(params.dimension)?;
        let state = state.next(SequenceState::ComputedTrace)?;

        let branch = select_branch(trace, params.threshold);
        self.notifier.branch_selected(branch, trace, params.threshold);
        let state = state.next(branch.state())?;

        let work = match branch {
            Branch::A => BranchWork::ProofOfWork(self.workloads.proof_of_work(
                &params.block_data,
                params.difficulty,
                &params.limits,
            )?),
            Branch::B => BranchWork::from_primes(&self.workloads.find_primes(params.max_primes)),
        };

        state.next(SequenceState::Done)?;
        let elapsed = started.elapsed();

        info!(
            branch = %branch,
            trace,
            elapsed_ms = elapsed.as_millis() as u64,
            "Sequence complete"
        );

        Ok(BranchOutcome {
            branch,
            elapsed,
            trace,
            threshold: params.threshold,
            work,
        })
    }

    /// Release the ports
    pub fn into_parts(self) -> (W, N) {
        (self.workloads, self.notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProofOfWork, SearchLimits};
    use crate::error::WorkloadError;

    /// Returns a fixed trace and records which workloads ran
    #[derive(Default)]
    struct FixedTrace {
        trace: i64,
        pow_calls: usize,
        prime_calls: usize,
        fail_pow: bool,
    }

    impl Workloads for FixedTrace {
        fn matrix_trace(&mut self, _dimension: usize) -> Result<i64> {
            Ok(self.trace)
        }

        fn proof_of_work(
            &mut self,
            payload: &str,
            _difficulty: usize,
            _limits: &SearchLimits,
        ) -> Result<ProofOfWork> {
            self.pow_calls += 1;
            if self.fail_pow {
                return Err(WorkloadError::Cancelled { attempts: 3 });
            }
            Ok(ProofOfWork {
                digest: payload.to_string(),
                nonce: 0,
                attempts: 1,
            })
        }

        fn find_primes(&mut self, max: u64) -> Vec<u64> {
            self.prime_calls += 1;
            crate::domain::find_primes(max)
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<(Branch, i64, i64)>);

    impl BranchNotifier for Recorder {
        fn branch_selected(&mut self, branch: Branch, trace: i64, threshold: i64) {
            self.0.push((branch, trace, threshold));
        }
    }

    fn params(threshold: i64) -> SequenceParams {
        SequenceParams {
            threshold,
            max_primes: 10,
            ..SequenceParams::default()
        }
    }

    #[test]
    fn test_trace_above_threshold_runs_branch_a() {
        let mut sequencer = Sequencer::new(
            FixedTrace {
                trace: 101,
                ..Default::default()
            },
            Recorder::default(),
        );
        let outcome = sequencer.run(&params(100)).unwrap();
        assert_eq!(outcome.branch, Branch::A);
        assert!(matches!(outcome.work, BranchWork::ProofOfWork(_)));

        let (workloads, recorder) = sequencer.into_parts();
        assert_eq!(workloads.pow_calls, 1);
        assert_eq!(workloads.prime_calls, 0);
        assert_eq!(recorder.0, vec![(Branch::A, 101, 100)]);
    }

    #[test]
    fn test_trace_equal_to_threshold_runs_branch_b() {
        let mut sequencer = Sequencer::new(
            FixedTrace {
                trace: 100,
                ..Default::default()
            },
            Recorder::default(),
        );
        let outcome = sequencer.run(&params(100)).unwrap();
        assert_eq!(outcome.branch, Branch::B);
        assert_eq!(
            outcome.work,
            BranchWork::Primes {
                count: 4,
                largest: Some(7)
            }
        );

        let (workloads, recorder) = sequencer.into_parts();
        assert_eq!(workloads.pow_calls, 0);
        assert_eq!(workloads.prime_calls, 1);
        assert_eq!(recorder.0, vec![(Branch::B, 100, 100)]);
    }

    #[test]
    fn test_outcome_records_trace_and_threshold() {
        let mut sequencer = Sequencer::new(
            FixedTrace {
                trace: -4,
                ..Default::default()
            },
            Recorder::default(),
        );
        let outcome = sequencer.run(&params(7)).unwrap();
        assert_eq!(outcome.trace, -4);
        assert_eq!(outcome.threshold, 7);
    }

    #[test]
    fn test_pow_error_propagates() {
        let mut sequencer = Sequencer::new(
            FixedTrace {
                trace: 1,
                fail_pow: true,
                ..Default::default()
            },
            Recorder::default(),
        );
        let err = sequencer.run(&params(0)).unwrap_err();
        assert_eq!(err, WorkloadError::Cancelled { attempts: 3 });
    }

    #[test]
    fn test_borrowed_ports() {
        let mut workloads = FixedTrace::default();
        let mut recorder = Recorder::default();
        {
            let mut sequencer = Sequencer::new(&mut workloads, &mut recorder);
            sequencer.run(&params(0)).unwrap();
        }
        assert_eq!(workloads.prime_calls, 1);
        assert_eq!(recorder.0.len(), 1);
    }
}
