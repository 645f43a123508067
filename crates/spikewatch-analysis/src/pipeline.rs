//! One end-to-end run: generate, detect, score.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;
use spikewatch_core::config::SpikeConfig;
use spikewatch_core::errors::{RenderError, RunError, SpikeErrorCode};
use spikewatch_core::events::{
    AnomaliesDetectedEvent, EventDispatcher, RunErrorEvent, StreamGeneratedEvent,
};
use spikewatch_core::AnomalySet;

use crate::detector::{detect_with_stats, DetectionOutcome, DetectionReport, SummaryStats};
use crate::evaluation::{evaluate, DetectionScore};
use crate::generator::{generate_labeled, GroundTruth, LabeledStream};

/// Everything a run produced, for rendering and reporting.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub seed: Option<u64>,
    pub anomaly_rate: f64,
    pub labeled: LabeledStream,
    pub report: DetectionReport,
    pub score: DetectionScore,
}

/// Serializable view of a run, written as the JSON report.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub seed: Option<u64>,
    pub length: usize,
    pub anomaly_rate: f64,
    pub threshold: f64,
    pub outcome: DetectionOutcome,
    pub stats: Option<SummaryStats>,
    pub anomalies: &'a AnomalySet,
    pub injected: &'a GroundTruth,
    pub score: DetectionScore,
}

impl RunOutcome {
    pub fn summary(&self) -> RunSummary<'_> {
        RunSummary {
            seed: self.seed,
            length: self.labeled.stream.len(),
            anomaly_rate: self.anomaly_rate,
            threshold: self.report.threshold,
            outcome: self.report.outcome,
            stats: self.report.stats,
            anomalies: &self.report.anomalies,
            injected: &self.labeled.ground_truth,
            score: self.score,
        }
    }

    /// Write the run summary as pretty-printed JSON.
    pub fn write_report(&self, path: &Path) -> Result<(), RenderError> {
        let target = path.display().to_string();
        let file = File::create(path).map_err(|e| RenderError::io(target.clone(), e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.summary())
            .map_err(|e| RenderError::Serialization(e.to_string()))?;
        writeln!(writer).map_err(|e| RenderError::io(target.clone(), e))?;
        writer.flush().map_err(|e| RenderError::io(target, e))
    }
}

/// Build the run's RNG from the configured seed, or from OS entropy when
/// none is set. The seed used is returned so the run can be replayed.
pub fn seeded_rng(config: &SpikeConfig) -> (StdRng, u64) {
    let seed = config.generator.seed.unwrap_or_else(|| OsRng.gen());
    (StdRng::seed_from_u64(seed), seed)
}

/// Generate a stream, detect anomalies, and score them against the spikes
/// that were injected.
///
/// A generation failure is reported to `events` and returned; detection
/// never runs on a rejected request.
pub fn run<R: Rng + ?Sized>(
    config: &SpikeConfig,
    rng: &mut R,
    events: &EventDispatcher,
) -> Result<RunOutcome, RunError> {
    let length = config.generator.effective_length();
    let anomaly_rate = config.generator.effective_anomaly_rate();
    let threshold = config.detector.effective_threshold();

    let labeled = match generate_labeled(length, anomaly_rate, rng) {
        Ok(labeled) => labeled,
        Err(e) => {
            events.emit_run_error(&RunErrorEvent {
                code: e.error_code(),
                message: e.to_string(),
            });
            return Err(e.into());
        }
    };
    events.emit_stream_generated(&StreamGeneratedEvent {
        length,
        anomaly_rate,
        spikes: labeled.ground_truth.len(),
        seed: config.generator.seed,
    });

    let report = detect_with_stats(&labeled.stream, threshold);
    events.emit_anomalies_detected(&AnomaliesDetectedEvent {
        flagged: report.anomalies.len(),
        mean: report.stats.map_or(f64::NAN, |s| s.mean),
        std_dev: report.stats.map_or(f64::NAN, |s| s.std_dev),
        threshold,
    });

    let score = evaluate(&labeled.ground_truth, &report.anomalies);
    tracing::info!(
        length,
        spikes = labeled.ground_truth.len(),
        flagged = report.anomalies.len(),
        precision = score.precision,
        recall = score.recall,
        "run complete"
    );

    Ok(RunOutcome {
        seed: config.generator.seed,
        anomaly_rate,
        labeled,
        report,
        score,
    })
}
