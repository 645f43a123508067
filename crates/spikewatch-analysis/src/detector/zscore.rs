//! Global z-score detection over a single batch.

use serde::Serialize;
use spikewatch_core::constants::DEFAULT_Z_THRESHOLD;
use spikewatch_core::{Anomaly, AnomalySet, AnomalySetBuilder, DataStream};

use super::stats::SummaryStats;

/// Which branch of the detector produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionOutcome {
    /// Every point was scored against the batch statistics.
    Scored,
    /// The stream had no points.
    Empty,
    /// All points share one value; nothing can deviate.
    ZeroVariance,
    /// The statistics are NaN or infinite, so no score is meaningful.
    NonFinite,
}

/// Detection result with the statistics it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    pub stats: Option<SummaryStats>,
    pub threshold: f64,
    pub outcome: DetectionOutcome,
    pub anomalies: AnomalySet,
}

/// Flag every point whose absolute z-score is strictly greater than
/// `threshold`. Results are in ascending index order.
pub fn detect(stream: &DataStream, threshold: f64) -> AnomalySet {
    detect_with_stats(stream, threshold).anomalies
}

/// [`detect`], keeping the batch statistics and the branch taken.
pub fn detect_with_stats(stream: &DataStream, threshold: f64) -> DetectionReport {
    let values = stream.as_slice();
    let Some(stats) = SummaryStats::compute(values) else {
        tracing::warn!("empty stream, nothing to score");
        return unscored(None, threshold, DetectionOutcome::Empty);
    };

    if !stats.mean.is_finite() || !stats.std_dev.is_finite() {
        tracing::warn!(
            mean = stats.mean,
            std_dev = stats.std_dev,
            "non-finite statistics, no anomalies reported"
        );
        return unscored(Some(stats), threshold, DetectionOutcome::NonFinite);
    }

    if stats.is_constant() {
        tracing::warn!(
            count = stats.count,
            value = stats.mean,
            "zero variance, no anomalies reported"
        );
        return unscored(Some(stats), threshold, DetectionOutcome::ZeroVariance);
    }

    let mut builder = AnomalySetBuilder::new();
    for (index, &value) in values.iter().enumerate() {
        if stats.z_score(value).abs() > threshold {
            builder.push(Anomaly::new(index, value));
        }
    }
    let anomalies = builder.build();

    tracing::debug!(
        mean = stats.mean,
        std_dev = stats.std_dev,
        threshold,
        flagged = anomalies.len(),
        "z-score detection complete"
    );

    DetectionReport {
        stats: Some(stats),
        threshold,
        outcome: DetectionOutcome::Scored,
        anomalies,
    }
}

fn unscored(
    stats: Option<SummaryStats>,
    threshold: f64,
    outcome: DetectionOutcome,
) -> DetectionReport {
    DetectionReport {
        stats,
        threshold,
        outcome,
        anomalies: AnomalySet::empty(),
    }
}

/// Z-score detector with a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreDetector {
    pub threshold: f64,
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_Z_THRESHOLD,
        }
    }
}

impl ZScoreDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn detect(&self, stream: &DataStream) -> AnomalySet {
        detect(stream, self.threshold)
    }

    pub fn detect_with_stats(&self, stream: &DataStream) -> DetectionReport {
        detect_with_stats(stream, self.threshold)
    }
}
