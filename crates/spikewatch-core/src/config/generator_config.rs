//! Stream generation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ANOMALY_RATE, DEFAULT_LENGTH};

/// Configuration for the stream generator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of time steps. Default: 500.
    pub length: Option<usize>,
    /// Fraction of points that receive a spike. Default: 0.05.
    pub anomaly_rate: Option<f64>,
    /// RNG seed. When unset, the run is seeded from OS entropy.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Returns the effective series length, defaulting to 500.
    pub fn effective_length(&self) -> usize {
        self.length.unwrap_or(DEFAULT_LENGTH)
    }

    /// Returns the effective anomaly rate, defaulting to 0.05.
    pub fn effective_anomaly_rate(&self) -> f64 {
        self.anomaly_rate.unwrap_or(DEFAULT_ANOMALY_RATE)
    }
}
