/// Largest bound the collaborator layer accepts before refusing to sieve.
pub const DEFAULT_MAX_BOUND: u64 = 2_000_000;

/// Bound used by the CLI when none is given.
pub const DEFAULT_CLI_BOUND: i64 = 10_000;

/// Number of distinct gap sizes shown in the gap chart.
pub const DEFAULT_GAP_CHART_LIMIT: usize = 50;

/// Lower clamp for the distribution bucket count.
pub const DEFAULT_MIN_BUCKETS: usize = 10;

/// Upper clamp for the distribution bucket count.
pub const DEFAULT_MAX_BUCKETS: usize = 50;

/// One bucket per this many integers before clamping.
pub const BUCKET_SPAN_DIVISOR: i64 = 100;

/// Samples of the cumulative prime count drawn under the distribution chart.
pub const DEFAULT_CUMULATIVE_POINTS: usize = 10;

/// Twin pairs printed by the human report.
pub const DEFAULT_TWIN_DISPLAY_LIMIT: usize = 20;

/// Decimal places kept for averages and percentages.
pub const ROUNDING_DECIMALS: i32 = 2;
