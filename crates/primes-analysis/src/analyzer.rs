//! Distribution analysis over an ordered prime sequence.
//!
//! One linear pass over consecutive pairs accumulates the gap histogram,
//! the gap extrema and total, and the twin pairs.

use primes_core::types::format::round2;
use primes_core::types::{AnalysisResult, GapHistogram, GapStatistics, TwinPair};

/// Gap size that makes two consecutive primes a twin pair.
pub const TWIN_GAP: u64 = 2;

/// Build the full [`AnalysisResult`] for `primes`, the output of
/// [`crate::sieve::generate`] for `bound`.
///
/// `primes` must be strictly increasing and contain only primes; other input
/// yields meaningless statistics but never panics. With fewer than two
/// primes there are no gaps, and every statistic is zero.
pub fn summarize(primes: Vec<u64>, bound: i64) -> AnalysisResult {
    let prime_count = primes.len();
    if prime_count < 2 {
        return AnalysisResult {
            bound,
            primes,
            prime_count,
            twin_primes: Vec::new(),
            gaps: GapHistogram::new(),
            gap_stats: GapStatistics::default(),
        };
    }

    let mut gaps = GapHistogram::new();
    let mut twin_primes = Vec::new();
    let mut total: u64 = 0;
    let mut min = u64::MAX;
    let mut max = 0;

    for pair in primes.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        let gap = q.saturating_sub(p);

        total = total.saturating_add(gap);
        min = min.min(gap);
        max = max.max(gap);
        gaps.record(gap);

        if gap == TWIN_GAP {
            twin_primes.push(TwinPair(p, q));
        }
    }

    let gap_count = prime_count - 1;
    let gap_stats = GapStatistics {
        min,
        max,
        average: round2(total as f64 / gap_count as f64),
    };

    tracing::debug!(
        bound,
        prime_count,
        distinct_gaps = gaps.len(),
        twin_count = twin_primes.len(),
        "distribution analyzed"
    );

    AnalysisResult {
        bound,
        primes,
        prime_count,
        twin_primes,
        gaps,
        gap_stats,
    }
}
