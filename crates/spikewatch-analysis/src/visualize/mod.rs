//! Chart rendering for a stream and its flagged points.
//!
//! Two renderers share one trait: a terminal chart for quick inspection and
//! an SVG document for sharing. Neither feeds anything back into detection.

pub mod ascii;
pub mod svg;

use std::io::Write;

use spikewatch_core::errors::RenderError;
use spikewatch_core::{AnomalySet, DataStream};

pub use ascii::AsciiChart;
pub use svg::SvgChart;

/// Chart title shared by every renderer.
pub const CHART_TITLE: &str = "Data Stream with Anomalies";

/// Renders the stream as a line and the anomalies as markers.
pub trait Visualizer {
    fn render(
        &self,
        stream: &DataStream,
        anomalies: &AnomalySet,
        out: &mut dyn Write,
    ) -> Result<(), RenderError>;
}

/// Min and max over the finite values, or `None` if there are none.
pub(crate) fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Position of `value` within `[lo, hi]` as a fraction in `[0, 1]`.
/// A degenerate range maps everything to the middle.
pub(crate) fn unit_position(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}
