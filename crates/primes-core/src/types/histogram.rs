//! Gap histogram: gap size -> number of consecutive prime pairs with that gap.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Frequency of each observed gap size.
///
/// Only gaps that actually occur have an entry, and every count is positive.
/// Iteration order is unspecified; callers that need an order use
/// [`GapHistogram::sorted_series`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GapHistogram {
    counts: FxHashMap<u64, u64>,
}

impl GapHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `gap`.
    pub fn record(&mut self, gap: u64) {
        *self.counts.entry(gap).or_insert(0) += 1;
    }

    /// Occurrences of `gap`, or `None` if it was never observed.
    pub fn get(&self, gap: u64) -> Option<u64> {
        self.counts.get(&gap).copied()
    }

    /// Iterate `(gap, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&gap, &count)| (gap, count))
    }

    /// Number of distinct gap sizes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of gaps observed.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(gap, count)` pairs ascending by gap size, truncated to `limit` entries.
    pub fn sorted_series(&self, limit: usize) -> Vec<(u64, u64)> {
        let mut series: Vec<(u64, u64)> = self.iter().collect();
        series.sort_unstable_by_key(|&(gap, _)| gap);
        series.truncate(limit);
        series
    }
}

impl FromIterator<u64> for GapHistogram {
    fn from_iter<I: IntoIterator<Item = u64>>(gaps: I) -> Self {
        let mut histogram = Self::new();
        for gap in gaps {
            histogram.record(gap);
        }
        histogram
    }
}
