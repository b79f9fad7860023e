//! Sieve of Eratosthenes.

/// All primes `p` with `2 <= p <= bound`, strictly increasing.
///
/// Bounds below 2 (zero and negatives included) give an empty sequence.
/// Runs in O(N log log N) time and allocates one `bool` per integer in
/// `[0, bound]`; callers cap the bound, this function does not.
pub fn generate(bound: i64) -> Vec<u64> {
    if bound < 2 {
        return Vec::new();
    }
    // Bounds beyond the address space fail allocation like any oversized Vec.
    let n = usize::try_from(bound).unwrap_or(usize::MAX);

    let mut is_prime = vec![true; n.saturating_add(1)];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2usize;
    while p <= n / p {
        if is_prime[p] {
            // Multiples below p*p already have a smaller prime factor.
            for multiple in (p * p..=n).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    let primes: Vec<u64> = is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(i, _)| i as u64)
        .collect();

    tracing::debug!(bound, prime_count = primes.len(), "sieve complete");
    primes
}
