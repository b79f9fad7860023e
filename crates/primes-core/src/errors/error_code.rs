//! PrimesErrorCode trait for structured error reporting.

/// Trait for mapping errors to stable, machine-readable codes.
/// Every error enum implements this so a presentation layer can branch
/// on the code instead of parsing messages.
pub trait PrimesErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const BOUND_EXCEEDS_CEILING: &str = "BOUND_EXCEEDS_CEILING";
pub const SUPERSEDED: &str = "SUPERSEDED";
pub const WORKER_LOST: &str = "WORKER_LOST";
pub const ALREADY_DELIVERED: &str = "ALREADY_DELIVERED";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
