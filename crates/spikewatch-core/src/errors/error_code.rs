//! SpikeErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait SpikeErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const DISTRIBUTION_ERROR: &str = "DISTRIBUTION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
