//! Prime enumeration by trial division, O(n^1.5).

/// Trial division: no divisor `j` with `j * j <= candidate`.
pub fn is_prime(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    let mut j: u64 = 2;
    while j.saturating_mul(j) <= candidate {
        if candidate % j == 0 {
            return false;
        }
        j += 1;
    }
    true
}

/// All primes in `[2, max)`, ascending. Empty when `max <= 2`.
pub fn find_primes(max: u64) -> Vec<u64> {
    (2..max).filter(|&i| is_prime(i)).collect()
}
