//! Configuration system for the prime analyzer.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod primes_config;
pub mod report_config;

pub use analysis_config::AnalysisConfig;
pub use primes_config::{CliOverrides, PrimesConfig};
pub use report_config::ReportConfig;
