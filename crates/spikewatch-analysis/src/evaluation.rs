//! Scoring detections against the injected ground truth.

use std::cmp::Ordering;

use serde::Serialize;
use spikewatch_core::AnomalySet;

use crate::generator::GroundTruth;

/// Confusion counts and derived rates for one detection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionScore {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    /// `tp / (tp + fp)`; 1.0 when nothing was flagged.
    pub precision: f64,
    /// `tp / (tp + fn)`; 1.0 when nothing was injected.
    pub recall: f64,
}

impl DetectionScore {
    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        let denom = self.precision + self.recall;
        if denom == 0.0 {
            0.0
        } else {
            2.0 * self.precision * self.recall / denom
        }
    }
}

/// Compare flagged indices with spiked indices. Both are sorted, so this is
/// a single merge walk.
pub fn evaluate(ground_truth: &GroundTruth, anomalies: &AnomalySet) -> DetectionScore {
    let truth = ground_truth.as_slice();
    let mut flagged = anomalies.indices().peekable();
    let mut t = 0;
    let mut true_positives = 0;
    let mut false_positives = 0;

    while let Some(&index) = flagged.peek() {
        match truth.get(t).map(|&spiked| spiked.cmp(&index)) {
            Some(Ordering::Less) => t += 1,
            Some(Ordering::Equal) => {
                true_positives += 1;
                t += 1;
                flagged.next();
            }
            Some(Ordering::Greater) | None => {
                false_positives += 1;
                flagged.next();
            }
        }
    }
    let false_negatives = truth.len() - true_positives;

    DetectionScore {
        true_positives,
        false_positives,
        false_negatives,
        precision: ratio(true_positives, true_positives + false_positives),
        recall: ratio(true_positives, truth.len()),
    }
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        hits as f64 / total as f64
    }
}
