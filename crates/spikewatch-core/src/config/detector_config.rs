//! Detector configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_Z_THRESHOLD;

/// Configuration for the z-score detector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectorConfig {
    /// Absolute z-score a point must exceed to be flagged. Default: 3.0.
    pub threshold: Option<f64>,
}

impl DetectorConfig {
    /// Returns the effective threshold, defaulting to 3.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_Z_THRESHOLD)
    }
}
