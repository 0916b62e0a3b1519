//! Benchmark utilities for the Branch-Bench workloads
pub mod utils {
    use bb_workloads::{random_pair, Matrix, Result};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Fixed seed so every benchmark run multiplies the same matrices
    pub const BENCH_SEED: u64 = 0x5EED;

    /// Deterministic operand pair for trace benchmarks
    pub fn seeded_pair(dimension: usize) -> Result<(Matrix, Matrix)> {
        random_pair(dimension, &mut StdRng::seed_from_u64(BENCH_SEED))
    }
}
