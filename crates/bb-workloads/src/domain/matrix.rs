//! # Matrix Trace Computation
//!
//! Multiplies two random square matrices and returns the trace of the
//! product without materializing it:
//!
//! ```text
//! trace(A·B) = Σ_i Σ_k A[i][k] · B[k][i]
//! ```
//!
//! O(n³) time, O(n²) space. Entries are drawn uniformly from
//! `[0, MAX_ENTRY]` using the caller's RNG, so a seeded RNG gives a
//! reproducible trace.

use rand::Rng;

use crate::error::{Result, WorkloadError};

/// Largest value a generated matrix entry can take
pub const MAX_ENTRY: i64 = 9;

/// Square matrix with row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dimension: usize,
    entries: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from row-major entries.
    ///
    /// Fails if `entries.len() != dimension * dimension`.
    pub fn from_entries(dimension: usize, entries: Vec<i64>) -> Result<Self> {
        let expected = cell_count(dimension)?;
        if entries.len() != expected {
            return Err(WorkloadError::invalid(format!(
                "expected {expected} entries for a {dimension}x{dimension} matrix, got {}",
                entries.len()
            )));
        }
        Ok(Self { dimension, entries })
    }

    /// Matrix of side `dimension` with entries drawn from `[0, MAX_ENTRY]`
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Self> {
        let entries = (0..cell_count(dimension)?)
            .map(|_| rng.gen_range(0..=MAX_ENTRY))
            .collect();
        Ok(Self { dimension, entries })
    }

    /// Side length
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Entry at `(row, col)`, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        self.entries.get(row * self.dimension + col).copied()
    }

    /// All entries, row-major
    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.dimension + col]
    }
}

/// Trace of `a · b`, computed without building the product.
///
/// Arithmetic wraps on overflow.
pub fn trace_of_product(a: &Matrix, b: &Matrix) -> Result<i64> {
    if a.dimension != b.dimension {
        return Err(WorkloadError::DimensionMismatch {
            left: a.dimension,
            right: b.dimension,
        });
    }

    let n = a.dimension;
    let mut trace: i64 = 0;
    for i in 0..n {
        let mut sum: i64 = 0;
        for k in 0..n {
            sum = sum.wrapping_add(a.at(i, k).wrapping_mul(b.at(k, i)));
        }
        trace = trace.wrapping_add(sum);
    }
    Ok(trace)
}

/// Generate two random `dimension`×`dimension` matrices and return the trace
/// of their product. `dimension == 0` yields 0.
pub fn compute_trace<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<i64> {
    let (first, second) = random_pair(dimension, rng)?;
    trace_of_product(&first, &second)
}

/// Draw the two operands cell by cell, alternating between them, so that a
/// given seed maps to one well-defined pair.
///
/// Fails when `dimension²` does not fit in `usize`.
pub fn random_pair<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<(Matrix, Matrix)> {
    let cells = cell_count(dimension)?;
    let mut first = Vec::with_capacity(cells);
    let mut second = Vec::with_capacity(cells);
    for _ in 0..cells {
        first.push(rng.gen_range(0..=MAX_ENTRY));
        second.push(rng.gen_range(0..=MAX_ENTRY));
    }
    Ok((
        Matrix {
            dimension,
            entries: first,
        },
        Matrix {
            dimension,
            entries: second,
        },
    ))
}

fn cell_count(dimension: usize) -> Result<usize> {
    dimension
        .checked_mul(dimension)
        .ok_or_else(|| WorkloadError::invalid(format!("dimension {dimension} too large")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn naive_trace(a: &Matrix, b: &Matrix) -> i64 {
        // Full product, then sum of the diagonal
        let n = a.dimension();
        let mut product = vec![0i64; n * n];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    product[i * n + j] += a.at(i, k) * b.at(k, j);
                }
            }
        }
        (0..n).map(|i| product[i * n + i]).sum()
    }

    #[test]
    fn test_zero_dimension_trace_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(compute_trace(0, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_random_entries_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 5, 17] {
            let (a, b) = random_pair(n, &mut rng).unwrap();
            assert_eq!(a.entries().len(), n * n);
            assert!(a.entries().iter().all(|v| (0..=MAX_ENTRY).contains(v)));
            assert!(b.entries().iter().all(|v| (0..=MAX_ENTRY).contains(v)));
        }
        let m = Matrix::random(6, &mut rng).unwrap();
        assert!(m.entries().iter().all(|v| (0..=MAX_ENTRY).contains(v)));
    }

    #[test]
    fn test_trace_matches_full_product() {
        let mut rng = StdRng::seed_from_u64(42);
        let (a, b) = random_pair(12, &mut rng).unwrap();
        assert_eq!(trace_of_product(&a, &b).unwrap(), naive_trace(&a, &b));
    }

    #[test]
    fn test_known_trace() {
        // [1 2] [5 6]   [19 22]
        // [3 4] [7 8] = [43 50]  -> trace 69
        let a = Matrix::from_entries(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_entries(2, vec![5, 6, 7, 8]).unwrap();
        assert_eq!(trace_of_product(&a, &b).unwrap(), 69);
    }

    #[test]
    fn test_trace_is_deterministic_for_seed() {
        let t1 = compute_trace(20, &mut StdRng::seed_from_u64(99)).unwrap();
        let t2 = compute_trace(20, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_trace_bounds() {
        let n = 10;
        let trace = compute_trace(n, &mut StdRng::seed_from_u64(3)).unwrap();
        let max = (n * n) as i64 * MAX_ENTRY * MAX_ENTRY;
        assert!((0..=max).contains(&trace));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::from_entries(1, vec![1]).unwrap();
        let b = Matrix::from_entries(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(
            trace_of_product(&a, &b),
            Err(WorkloadError::DimensionMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let huge = usize::MAX / 2;
        assert!(matches!(
            compute_trace(huge, &mut rng),
            Err(WorkloadError::InvalidArgument(_))
        ));
        assert!(random_pair(huge, &mut rng).is_err());
        assert!(Matrix::random(huge, &mut rng).is_err());
        assert!(Matrix::from_entries(huge, Vec::new()).is_err());
    }

    #[test]
    fn test_from_entries_rejects_wrong_length() {
        assert!(Matrix::from_entries(2, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_trace_wraps_on_overflow() {
        let a = Matrix::from_entries(1, vec![i64::MAX]).unwrap();
        let b = Matrix::from_entries(1, vec![2]).unwrap();
        assert_eq!(trace_of_product(&a, &b).unwrap(), i64::MAX.wrapping_mul(2));
    }

    #[test]
    fn test_get_out_of_range() {
        let m = Matrix::from_entries(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.get(1, 0), Some(3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.dimension(), 2);
    }
}
