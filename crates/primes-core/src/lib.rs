//! # primes-core
//!
//! Foundation crate for the prime analyzer.
//! Defines the result types, errors, config, events, tracing setup and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PrimesConfig;
pub use errors::{AnalysisError, ConfigError, PrimesErrorCode};
pub use types::{AnalysisResult, GapHistogram, GapStatistics, TwinPair};
