//! Branch notice emitted through `tracing`

use crate::domain::Branch;
use crate::ports::BranchNotifier;

/// Logs the selected branch at INFO level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl BranchNotifier for TracingNotifier {
    fn branch_selected(&mut self, branch: Branch, trace: i64, threshold: i64) {
        tracing::info!(branch = %branch, trace, threshold, "Branch {} will run", branch);
    }
}
