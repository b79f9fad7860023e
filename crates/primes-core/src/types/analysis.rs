//! The aggregate returned by one analysis run.

use serde::{Deserialize, Serialize};

use super::format::round2;
use super::histogram::GapHistogram;

/// Two consecutive primes exactly 2 apart, e.g. `(11, 13)`.
///
/// Serializes as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TwinPair(pub u64, pub u64);

impl TwinPair {
    pub fn first(&self) -> u64 {
        self.0
    }

    pub fn second(&self) -> u64 {
        self.1
    }
}

/// Extremes and mean of the consecutive-prime gaps.
///
/// All fields are zero when fewer than two primes exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GapStatistics {
    pub min: u64,
    pub max: u64,
    /// Mean gap, rounded to 2 decimals (ties away from zero).
    pub average: f64,
}

/// Everything derived from the primes up to one bound.
///
/// Self-contained: a renderer needs nothing else to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Inclusive upper limit that was analyzed, exactly as requested.
    pub bound: i64,
    /// All primes `<= bound`, strictly increasing.
    pub primes: Vec<u64>,
    pub prime_count: usize,
    /// Twin pairs in ascending order of their first member.
    pub twin_primes: Vec<TwinPair>,
    pub gaps: GapHistogram,
    pub gap_stats: GapStatistics,
}

impl AnalysisResult {
    /// A well-formed result with no primes. Used for every bound below 2.
    pub fn empty(bound: i64) -> Self {
        Self {
            bound,
            primes: Vec::new(),
            prime_count: 0,
            twin_primes: Vec::new(),
            gaps: GapHistogram::new(),
            gap_stats: GapStatistics::default(),
        }
    }

    /// Number of consecutive gaps, `prime_count - 1` (or 0).
    pub fn gap_count(&self) -> usize {
        self.prime_count.saturating_sub(1)
    }

    /// Share of integers in `[1, bound]` that are prime, as a percentage
    /// rounded to 2 decimals. Zero for non-positive bounds.
    pub fn density_percent(&self) -> f64 {
        if self.bound <= 0 {
            return 0.0;
        }
        round2(self.prime_count as f64 / self.bound as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_well_formed() {
        let r = AnalysisResult::empty(1);
        assert_eq!(r.bound, 1);
        assert_eq!(r.prime_count, 0);
        assert_eq!(r.gap_count(), 0);
        assert!(r.gaps.is_empty());
        assert_eq!(r.gap_stats, GapStatistics::default());
    }

    #[test]
    fn test_density_percent() {
        let mut r = AnalysisResult::empty(10);
        r.primes = vec![2, 3, 5, 7];
        r.prime_count = 4;
        assert_eq!(r.density_percent(), 40.0);

        assert_eq!(AnalysisResult::empty(0).density_percent(), 0.0);
        assert_eq!(AnalysisResult::empty(-5).density_percent(), 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let mut r = AnalysisResult::empty(10);
        r.twin_primes.push(TwinPair(3, 5));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["bound"], 10);
        assert_eq!(json["primeCount"], 0);
        assert_eq!(json["twinPrimes"][0], serde_json::json!([3, 5]));
        assert_eq!(json["gapStats"]["average"], 0.0);
    }
}
