//! Anomaly Detector — global z-score over the whole batch.
//!
//! Mean and population standard deviation are computed once over every
//! point; a point is flagged when `|x - μ| / σ` exceeds the threshold.
//! Constant, empty, and non-finite input are explicit branches that flag
//! nothing.

pub mod stats;
pub mod zscore;

pub use stats::SummaryStats;
pub use zscore::{detect, detect_with_stats, DetectionOutcome, DetectionReport, ZScoreDetector};
