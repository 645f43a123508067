//! Top-level run errors.

use super::error_code::SpikeErrorCode;
use super::{ConfigError, GenerationError, RenderError};

/// Errors that can end a run. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl SpikeErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Generation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
        }
    }
}
