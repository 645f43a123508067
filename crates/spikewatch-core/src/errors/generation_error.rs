//! Stream generation errors.

use super::error_code::{self, SpikeErrorCode};

/// Errors raised by the stream generator before any sample is drawn.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Stream length must be a positive integer, got {length}")]
    InvalidLength { length: usize },

    #[error("Anomaly rate must be within [0, 1], got {rate}")]
    InvalidAnomalyRate { rate: f64 },

    #[error("Invalid {component} parameters: {message}")]
    InvalidDistribution {
        component: &'static str,
        message: String,
    },
}

impl GenerationError {
    /// Whether this is a caller input error (length or rate) rather than a
    /// misconfigured generator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::InvalidAnomalyRate { .. }
        )
    }
}

impl SpikeErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } | Self::InvalidAnomalyRate { .. } => {
                error_code::VALIDATION_ERROR
            }
            Self::InvalidDistribution { .. } => error_code::DISTRIBUTION_ERROR,
        }
    }
}
