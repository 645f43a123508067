//! StreamGenerator — validated entry points for building a [`DataStream`].

use rand::distributions::Distribution;
use rand::Rng;
use serde::Serialize;
use spikewatch_core::errors::GenerationError;
use spikewatch_core::DataStream;

use super::injection::{apply_spikes, choose_positions, spike_count};
use super::shape::{SignalShape, SpikeProfile};

/// Generator configuration: base waveform plus spike magnitudes.
///
/// `StreamGenerator::default()` produces the standard demo signal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreamGenerator {
    pub shape: SignalShape,
    pub spikes: SpikeProfile,
}

/// Sorted positions that received a spike.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct GroundTruth(Vec<usize>);

impl GroundTruth {
    fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        Self(positions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }
}

/// A generated stream together with the positions that were spiked.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStream {
    pub stream: DataStream,
    pub ground_truth: GroundTruth,
}

impl StreamGenerator {
    pub fn new(shape: SignalShape, spikes: SpikeProfile) -> Self {
        Self { shape, spikes }
    }

    /// Generate `length` points with `floor(length · anomaly_rate)` spikes.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        length: usize,
        anomaly_rate: f64,
        rng: &mut R,
    ) -> Result<DataStream, GenerationError> {
        self.generate_labeled(length, anomaly_rate, rng)
            .map(|labeled| labeled.stream)
    }

    /// Like [`generate`](Self::generate), but also returns which positions
    /// were spiked. Consumes the RNG identically.
    pub fn generate_labeled<R: Rng + ?Sized>(
        &self,
        length: usize,
        anomaly_rate: f64,
        rng: &mut R,
    ) -> Result<LabeledStream, GenerationError> {
        validate_request(length, anomaly_rate)?;
        let noise = self.shape.noise_distribution()?;
        let magnitude = self.spikes.distribution()?;

        let mut values: Vec<f64> = (0..length)
            .map(|t| self.shape.value_at(t) + noise.sample(rng))
            .collect();

        let count = spike_count(length, anomaly_rate);
        let positions = choose_positions(rng, length, count);
        apply_spikes(&mut values, &positions, &magnitude, rng);

        tracing::debug!(length, anomaly_rate, spikes = count, "stream generated");

        Ok(LabeledStream {
            stream: DataStream::from(values),
            ground_truth: GroundTruth::from_positions(positions),
        })
    }
}

/// Generate the standard demo signal. See [`StreamGenerator::generate`].
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    anomaly_rate: f64,
    rng: &mut R,
) -> Result<DataStream, GenerationError> {
    StreamGenerator::default().generate(length, anomaly_rate, rng)
}

/// Generate the standard demo signal with its ground truth.
pub fn generate_labeled<R: Rng + ?Sized>(
    length: usize,
    anomaly_rate: f64,
    rng: &mut R,
) -> Result<LabeledStream, GenerationError> {
    StreamGenerator::default().generate_labeled(length, anomaly_rate, rng)
}

fn validate_request(length: usize, anomaly_rate: f64) -> Result<(), GenerationError> {
    if length == 0 {
        return Err(GenerationError::InvalidLength { length });
    }
    if !(0.0..=1.0).contains(&anomaly_rate) {
        return Err(GenerationError::InvalidAnomalyRate { rate: anomaly_rate });
    }
    Ok(())
}
