//! Analysis lifecycle events.
//! A presentation layer registers a handler to show progress (loading
//! indicator, error banner) without polling.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AnalysisEventHandler;
