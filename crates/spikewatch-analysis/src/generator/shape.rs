//! Deterministic signal shape and spike magnitude profile.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use spikewatch_core::constants::{
    NOISE_STD_DEV, PRIMARY_AMPLITUDE, PRIMARY_PERIOD, SEASONAL_AMPLITUDE, SEASONAL_PERIOD,
    SPIKE_MEAN, SPIKE_STD_DEV,
};
use spikewatch_core::errors::GenerationError;
use statrs::distribution::Normal;

/// Base waveform: a primary oscillation, a slower seasonal term, and the
/// spread of the noise added on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalShape {
    pub primary_amplitude: f64,
    pub primary_period: f64,
    pub seasonal_amplitude: f64,
    pub seasonal_period: f64,
    pub noise_std_dev: f64,
}

impl Default for SignalShape {
    fn default() -> Self {
        Self {
            primary_amplitude: PRIMARY_AMPLITUDE,
            primary_period: PRIMARY_PERIOD,
            seasonal_amplitude: SEASONAL_AMPLITUDE,
            seasonal_period: SEASONAL_PERIOD,
            noise_std_dev: NOISE_STD_DEV,
        }
    }
}

impl SignalShape {
    /// A shape with no periodic terms: pure noise around zero.
    pub fn flat(noise_std_dev: f64) -> Self {
        Self {
            primary_amplitude: 0.0,
            seasonal_amplitude: 0.0,
            noise_std_dev,
            ..Self::default()
        }
    }

    /// Noise-free value at time step `t`.
    pub fn value_at(&self, t: usize) -> f64 {
        let t = t as f64;
        self.primary_amplitude * (TAU * t / self.primary_period).sin()
            + self.seasonal_amplitude * (TAU * t / self.seasonal_period).cos()
    }

    /// Check periods and amplitudes, then build the noise distribution.
    pub(crate) fn noise_distribution(&self) -> Result<Normal, GenerationError> {
        for (name, period) in [
            ("primary_period", self.primary_period),
            ("seasonal_period", self.seasonal_period),
        ] {
            if !period.is_finite() || period == 0.0 {
                return Err(invalid(
                    "signal",
                    format!("{name} must be finite and non-zero, got {period}"),
                ));
            }
        }
        for (name, amplitude) in [
            ("primary_amplitude", self.primary_amplitude),
            ("seasonal_amplitude", self.seasonal_amplitude),
        ] {
            if !amplitude.is_finite() {
                return Err(invalid(
                    "signal",
                    format!("{name} must be finite, got {amplitude}"),
                ));
            }
        }
        normal("noise", 0.0, self.noise_std_dev)
    }
}

/// Magnitude of the additive spikes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpikeProfile {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for SpikeProfile {
    fn default() -> Self {
        Self {
            mean: SPIKE_MEAN,
            std_dev: SPIKE_STD_DEV,
        }
    }
}

impl SpikeProfile {
    pub(crate) fn distribution(&self) -> Result<Normal, GenerationError> {
        normal("spike", self.mean, self.std_dev)
    }
}

fn normal(component: &'static str, mean: f64, std_dev: f64) -> Result<Normal, GenerationError> {
    if !mean.is_finite() {
        return Err(invalid(component, format!("mean must be finite, got {mean}")));
    }
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(invalid(
            component,
            format!("std-dev must be positive and finite, got {std_dev}"),
        ));
    }
    Normal::new(mean, std_dev).map_err(|e| invalid(component, e.to_string()))
}

fn invalid(component: &'static str, message: String) -> GenerationError {
    GenerationError::InvalidDistribution { component, message }
}
