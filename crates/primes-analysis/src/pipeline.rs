//! The single entry point: sieve, then analyze.

use primes_core::types::AnalysisResult;

use crate::{analyzer, sieve};

/// Primes up to `bound` and their gap statistics.
///
/// Pure and total: any `i64` is accepted, bounds below 2 produce an empty
/// result, and equal bounds produce equal results. No ceiling is enforced
/// here; see [`crate::service::AnalysisService`] for that.
pub fn analyze(bound: i64) -> AnalysisResult {
    let primes = sieve::generate(bound);
    analyzer::summarize(primes, bound)
}
