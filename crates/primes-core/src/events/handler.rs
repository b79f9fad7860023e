//! AnalysisEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling analysis lifecycle events.
///
/// Handlers only override the events they care about. `Send + Sync` is
/// required because completion events fire on the worker thread.
pub trait AnalysisEventHandler: Send + Sync {
    fn on_analysis_started(&self, _event: &AnalysisStartedEvent) {}
    fn on_analysis_complete(&self, _event: &AnalysisCompleteEvent) {}
    fn on_analysis_rejected(&self, _event: &AnalysisRejectedEvent) {}
    fn on_analysis_superseded(&self, _event: &AnalysisSupersededEvent) {}
}
