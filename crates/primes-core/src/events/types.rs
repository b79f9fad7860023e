//! Event payload types for the analysis lifecycle.

/// Payload for `on_analysis_started`. Emitted once the bound has passed
/// the ceiling check and work is about to begin.
#[derive(Debug, Clone)]
pub struct AnalysisStartedEvent {
    pub bound: i64,
    /// Monotonic request number within one service.
    pub request_id: u64,
}

/// Payload for `on_analysis_complete`.
#[derive(Debug, Clone)]
pub struct AnalysisCompleteEvent {
    pub bound: i64,
    pub request_id: u64,
    pub prime_count: usize,
    pub twin_count: usize,
    pub duration_ms: u64,
}

/// Payload for `on_analysis_rejected`.
#[derive(Debug, Clone)]
pub struct AnalysisRejectedEvent {
    pub bound: i64,
    pub ceiling: u64,
    pub message: String,
}

/// Payload for `on_analysis_superseded`.
#[derive(Debug, Clone)]
pub struct AnalysisSupersededEvent {
    pub bound: i64,
    pub request_id: u64,
}
