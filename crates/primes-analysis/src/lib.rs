//! # primes-analysis
//!
//! Sieve of Eratosthenes plus a single-pass gap analysis over its output.
//!
//! [`analyze`] is the whole computation: pure, synchronous and total over
//! every `i64`. [`service::AnalysisService`] is the layer in front of it that
//! enforces the bound ceiling and moves work off the caller's thread.

pub mod analyzer;
pub mod distribution;
pub mod pipeline;
pub mod service;
pub mod sieve;

pub use distribution::{CumulativePoint, DistributionBucket};
pub use pipeline::analyze;
pub use service::{AnalysisService, AnalysisTicket};
