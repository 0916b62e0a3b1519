//! Port implementations

pub mod cpu;
pub mod notifier;

pub use cpu::CpuWorkloads;
pub use notifier::TracingNotifier;
