//! CLI errors.

use primes_core::errors::error_code::OUTPUT_ERROR;
use primes_core::errors::{AnalysisError, ConfigError, PrimesErrorCode};

/// Everything that can stop a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl PrimesErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Analysis(e) => e.error_code(),
            Self::Serialize(_) | Self::Io(_) => OUTPUT_ERROR,
        }
    }
}
