//! Ctrl-C handling
//!
//! Listening for Ctrl-C replaces the default SIGINT termination, so every
//! interrupt is routed through [`watch_interrupts`]. While the proof-of-work
//! search runs, the first Ctrl-C cancels it and the run reports the
//! cancellation; a second Ctrl-C, or any Ctrl-C outside the search, ends
//! the process.

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::warn;

use bb_workloads::{Branch, BranchNotifier};

/// Exit status after an interrupt (128 + SIGINT)
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// What a Ctrl-C does at the current point of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Stop the proof-of-work search
    CancelSearch,
    /// Terminate the process
    Exit,
}

/// Run phase shared between the signal task and the sequencer thread
#[derive(Debug, Clone, Default)]
pub struct InterruptState {
    cancel: Arc<AtomicBool>,
    searching: Arc<AtomicBool>,
}

impl InterruptState {
    /// Nothing running, nothing cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag for `SearchLimits::with_cancel_flag`
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Mark the proof-of-work search as running
    pub fn begin_search(&self) {
        self.searching.store(true, Ordering::SeqCst);
    }

    /// Whether Branch A has been selected
    pub fn is_searching(&self) -> bool {
        self.searching.load(Ordering::SeqCst)
    }

    /// Whether the search has been asked to stop
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Decide what the Ctrl-C that just arrived does.
    ///
    /// Only the first one during the search cancels it.
    pub fn on_interrupt(&self) -> InterruptAction {
        if self.is_searching() && !self.cancel.swap(true, Ordering::SeqCst) {
            InterruptAction::CancelSearch
        } else {
            InterruptAction::Exit
        }
    }

    /// Wrap `inner` so that selecting Branch A marks the search as running
    pub fn watch<N>(&self, inner: N) -> SearchWatch<N> {
        SearchWatch {
            inner,
            state: self.clone(),
        }
    }
}

/// Notifier wrapper that tracks the run phase for [`InterruptState`]
pub struct SearchWatch<N> {
    inner: N,
    state: InterruptState,
}

impl<N> SearchWatch<N> {
    /// Give the wrapped notifier back
    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: BranchNotifier> BranchNotifier for SearchWatch<N> {
    fn branch_selected(&mut self, branch: Branch, trace: i64, threshold: i64) {
        if branch == Branch::A {
            self.state.begin_search();
        }
        self.inner.branch_selected(branch, trace, threshold);
    }
}

/// Handle Ctrl-C until one of them should end the process.
///
/// `next_signal` resolves once per Ctrl-C (`tokio::signal::ctrl_c` in the
/// binary). Returns `Ok(())` when the caller should exit, or the error from
/// listening for the signal.
pub async fn watch_interrupts<F, Fut>(
    state: &InterruptState,
    mut next_signal: F,
) -> io::Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    loop {
        next_signal().await?;
        match state.on_interrupt() {
            InterruptAction::CancelSearch => {
                warn!("Ctrl-C received, cancelling proof-of-work search (press again to exit)");
            }
            InterruptAction::Exit if state.is_searching() => {
                warn!("Second Ctrl-C received, exiting");
                return Ok(());
            }
            InterruptAction::Exit => {
                warn!("Ctrl-C received, stopping the run");
                return Ok(());
            }
        }
    }
}
