//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_BOUND;

/// Configuration for the analysis request layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest bound accepted before sieving. Default: 2,000,000.
    pub max_bound: Option<u64>,
}

impl AnalysisConfig {
    /// Returns the effective ceiling, defaulting to 2,000,000.
    pub fn effective_max_bound(&self) -> u64 {
        self.max_bound.unwrap_or(DEFAULT_MAX_BOUND)
    }
}
