//! Error handling for the prime analyzer.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::PrimesErrorCode;
