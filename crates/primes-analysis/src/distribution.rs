//! Equal-width buckets over `[1, bound]` counting the primes in each, and
//! samples of the cumulative prime count.

use primes_core::config::ReportConfig;
use primes_core::constants::BUCKET_SPAN_DIVISOR;
use primes_core::types::AnalysisResult;
use serde::Serialize;

/// Primes falling in the inclusive range `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionBucket {
    pub start: u64,
    pub end: u64,
    pub count: usize,
}

impl DistributionBucket {
    /// Chart label, e.g. `"1-100"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Split `[1, bound]` into buckets and count `primes` per bucket.
///
/// The bucket count is `bound / 100` clamped to `[min_buckets, max_buckets]`,
/// and every bucket spans `ceil(bound / count)` integers, the last one
/// truncated at `bound`. Buckets that would start past `bound` are dropped,
/// so small bounds get fewer than `min_buckets`. Bounds below 2 yield none.
pub fn bucketize(
    primes: &[u64],
    bound: i64,
    min_buckets: usize,
    max_buckets: usize,
) -> Vec<DistributionBucket> {
    if bound < 2 {
        return Vec::new();
    }
    let limit = bound as u64;

    let raw = usize::try_from(bound / BUCKET_SPAN_DIVISOR).unwrap_or(usize::MAX);
    let bucket_count = raw.clamp(min_buckets.max(1), max_buckets.max(min_buckets).max(1)) as u64;
    let size = limit.div_ceil(bucket_count);

    let mut buckets: Vec<DistributionBucket> = (0..bucket_count)
        .map(|i| i * size + 1)
        .take_while(|&start| start <= limit)
        .map(|start| DistributionBucket {
            start,
            end: (start + size - 1).min(limit),
            count: 0,
        })
        .collect();

    for &prime in primes {
        let index = (prime.saturating_sub(1) / size) as usize;
        if let Some(bucket) = buckets.get_mut(index) {
            bucket.count += 1;
        }
    }
    buckets
}

/// Number of primes `<= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CumulativePoint {
    pub n: u64,
    pub count: usize,
}

/// Sample the prime-counting function at `points` evenly spaced values of
/// `n` in `[1, bound]`. The last sample is always `bound` itself; fewer
/// samples are returned when `bound < points`. Bounds below 2 yield none.
///
/// `primes` must be sorted ascending.
pub fn cumulative_counts(primes: &[u64], bound: i64, points: usize) -> Vec<CumulativePoint> {
    if bound < 2 || points == 0 {
        return Vec::new();
    }
    let limit = bound as u64;
    let samples = (points as u64).min(limit);

    (1..=samples)
        .map(|i| {
            let n = (u128::from(limit) * u128::from(i)).div_ceil(u128::from(samples)) as u64;
            CumulativePoint {
                n,
                count: primes.partition_point(|&p| p <= n),
            }
        })
        .collect()
}

/// [`cumulative_counts`] for a finished result using the report's sample count.
pub fn cumulative_for_result(result: &AnalysisResult, report: &ReportConfig) -> Vec<CumulativePoint> {
    cumulative_counts(&result.primes, result.bound, report.effective_cumulative_points())
}

/// [`bucketize`] a finished result using the report's bucket clamps.
pub fn for_result(result: &AnalysisResult, report: &ReportConfig) -> Vec<DistributionBucket> {
    bucketize(
        &result.primes,
        result.bound,
        report.effective_min_buckets(),
        report.effective_max_buckets(),
    )
}
