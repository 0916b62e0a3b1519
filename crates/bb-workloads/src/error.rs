//! Error types for the workload subsystem

use thiserror::Error;

/// Result type alias for workload operations
pub type Result<T> = std::result::Result<T, WorkloadError>;

/// Errors that can occur while running workloads or sequencing them
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    /// An input was outside the accepted domain (negative dimension, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two matrices of different dimensions were multiplied
    #[error("Dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// The proof-of-work search observed the cancellation flag
    #[error("Proof-of-work search cancelled after {attempts} attempts")]
    Cancelled {
        /// Hashes computed before cancellation
        attempts: u64,
    },

    /// The proof-of-work search used its whole attempt budget
    #[error("Proof-of-work search exhausted after {attempts} attempts")]
    SearchExhausted {
        /// Hashes computed
        attempts: u64,
    },

    /// The sequencer attempted a transition its state machine does not allow
    #[error("Invalid sequencer transition: {from} -> {to}")]
    InvalidTransition {
        /// State the sequencer was in
        from: String,
        /// State it tried to enter
        to: String,
    },
}

impl WorkloadError {
    /// Check if error is recoverable (the run can be retried with other limits)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::SearchExhausted { .. })
    }

    /// Shorthand for [`WorkloadError::InvalidArgument`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
