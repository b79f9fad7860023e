//! Report (chart and listing) configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CUMULATIVE_POINTS, DEFAULT_GAP_CHART_LIMIT, DEFAULT_MAX_BUCKETS, DEFAULT_MIN_BUCKETS,
    DEFAULT_TWIN_DISPLAY_LIMIT,
};

/// Configuration for how results are summarized for display.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Distinct gap sizes shown in the gap chart. Default: 50.
    pub gap_chart_limit: Option<usize>,
    /// Lower clamp for distribution buckets. Default: 10.
    pub min_buckets: Option<usize>,
    /// Upper clamp for distribution buckets. Default: 50.
    pub max_buckets: Option<usize>,
    /// Twin pairs listed in human output. Default: 20.
    pub twin_display_limit: Option<usize>,
    /// Samples of the cumulative prime count. 0 hides the series. Default: 10.
    pub cumulative_points: Option<usize>,
}

impl ReportConfig {
    pub fn effective_gap_chart_limit(&self) -> usize {
        self.gap_chart_limit.unwrap_or(DEFAULT_GAP_CHART_LIMIT)
    }

    pub fn effective_min_buckets(&self) -> usize {
        self.min_buckets.unwrap_or(DEFAULT_MIN_BUCKETS)
    }

    pub fn effective_max_buckets(&self) -> usize {
        self.max_buckets.unwrap_or(DEFAULT_MAX_BUCKETS)
    }

    pub fn effective_twin_display_limit(&self) -> usize {
        self.twin_display_limit.unwrap_or(DEFAULT_TWIN_DISPLAY_LIMIT)
    }

    pub fn effective_cumulative_points(&self) -> usize {
        self.cumulative_points.unwrap_or(DEFAULT_CUMULATIVE_POINTS)
    }
}
