//! # spikewatch-analysis
//!
//! Synthetic stream generation with spike injection, batch z-score
//! detection, scoring against ground truth, and chart rendering.

pub mod detector;
pub mod evaluation;
pub mod generator;
pub mod pipeline;
pub mod visualize;

pub use detector::{detect, DetectionReport, SummaryStats, ZScoreDetector};
pub use evaluation::{evaluate, DetectionScore};
pub use generator::{generate, generate_labeled, GroundTruth, LabeledStream, StreamGenerator};
pub use pipeline::{run, RunOutcome};
pub use visualize::{AsciiChart, SvgChart, Visualizer};
