//! Errors raised around an analysis request.
//!
//! The sieve and the analyzer are total and never fail. These errors belong
//! to the layer that decides whether, and on which thread, to run them.

use super::error_code::{self, PrimesErrorCode};
use crate::types::format::group_thousands;

/// Errors that can occur while requesting an analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The requested bound is above the configured ceiling. Raised before
    /// the sieve runs.
    #[error(
        "analysis bound {} exceeds the ceiling of {}",
        group_thousands(.bound),
        group_thousands(.ceiling)
    )]
    BoundExceedsCeiling { bound: i64, ceiling: u64 },

    /// A newer request replaced this one and its result was discarded.
    #[error("analysis for bound {bound} was superseded by a newer request")]
    Superseded { bound: i64 },

    /// The background worker ended without delivering a result.
    #[error("analysis worker for bound {bound} terminated without a result")]
    WorkerLost { bound: i64 },

    /// The ticket already handed out its result.
    #[error("result for bound {bound} was already delivered")]
    AlreadyDelivered { bound: i64 },
}

impl PrimesErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BoundExceedsCeiling { .. } => error_code::BOUND_EXCEEDS_CEILING,
            Self::Superseded { .. } => error_code::SUPERSEDED,
            Self::WorkerLost { .. } => error_code::WORKER_LOST,
            Self::AlreadyDelivered { .. } => error_code::ALREADY_DELIVERED,
        }
    }
}
