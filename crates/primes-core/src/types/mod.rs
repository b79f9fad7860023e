//! Result types produced by one analysis run.

pub mod analysis;
pub mod format;
pub mod histogram;

pub use analysis::{AnalysisResult, GapStatistics, TwinPair};
pub use histogram::GapHistogram;
