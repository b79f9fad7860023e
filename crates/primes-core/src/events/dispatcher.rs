//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::AnalysisEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, `emit` iterates over an empty Vec.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AnalysisEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AnalysisEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn AnalysisEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "event handler panicked");
            }
        }
    }

    pub fn emit_analysis_started(&self, event: &AnalysisStartedEvent) {
        self.emit("analysis_started", |h| h.on_analysis_started(event));
    }

    pub fn emit_analysis_complete(&self, event: &AnalysisCompleteEvent) {
        self.emit("analysis_complete", |h| h.on_analysis_complete(event));
    }

    pub fn emit_analysis_rejected(&self, event: &AnalysisRejectedEvent) {
        self.emit("analysis_rejected", |h| h.on_analysis_rejected(event));
    }

    pub fn emit_analysis_superseded(&self, event: &AnalysisSupersededEvent) {
        self.emit("analysis_superseded", |h| h.on_analysis_superseded(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
