//! Rendering errors.

use super::error_code::{self, SpikeErrorCode};

/// Errors that can occur while rendering or writing run output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("Chart dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },
}

impl RenderError {
    pub fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}

impl SpikeErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Serialization(_) | Self::InvalidDimensions { .. } => error_code::RENDER_ERROR,
        }
    }
}
