//! Terminal line chart.

use std::io::Write;

use spikewatch_core::constants::{DEFAULT_ASCII_HEIGHT, DEFAULT_ASCII_WIDTH};
use spikewatch_core::errors::RenderError;
use spikewatch_core::{AnomalySet, DataStream};

use super::{finite_range, unit_position, Visualizer, CHART_TITLE};

const SERIES: char = '*';
const MARKER: char = 'o';
const LABEL_WIDTH: usize = 10;

/// Plots the series as `*` and anomalies as `o` on a character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiChart {
    pub width: usize,
    pub height: usize,
}

impl Default for AsciiChart {
    fn default() -> Self {
        Self {
            width: DEFAULT_ASCII_WIDTH,
            height: DEFAULT_ASCII_HEIGHT,
        }
    }
}

impl AsciiChart {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Render into a `String`.
    pub fn render_to_string(
        &self,
        stream: &DataStream,
        anomalies: &AnomalySet,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(stream, anomalies, &mut buf)?;
        String::from_utf8(buf).map_err(|e| RenderError::Serialization(e.to_string()))
    }

    fn column(&self, index: usize, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            index * (self.width - 1) / (len - 1)
        }
    }

    fn row(&self, value: f64, lo: f64, hi: f64) -> usize {
        let from_bottom = unit_position(value, lo, hi) * (self.height - 1) as f64;
        (self.height - 1) - from_bottom.round() as usize
    }
}

impl Visualizer for AsciiChart {
    fn render(
        &self,
        stream: &DataStream,
        anomalies: &AnomalySet,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width as u64,
                height: self.height as u64,
            });
        }
        let io = |e| RenderError::io("terminal chart", e);

        writeln!(out, "{}", CHART_TITLE).map_err(io)?;

        let Some((lo, hi)) = finite_range(stream) else {
            writeln!(out, "(no data)").map_err(io)?;
            return Ok(());
        };

        let mut grid = vec![vec![' '; self.width]; self.height];
        for (index, &value) in stream.iter().enumerate() {
            if value.is_finite() {
                grid[self.row(value, lo, hi)][self.column(index, stream.len())] = SERIES;
            }
        }
        for anomaly in anomalies {
            if anomaly.value.is_finite() && anomaly.index < stream.len() {
                grid[self.row(anomaly.value, lo, hi)][self.column(anomaly.index, stream.len())] =
                    MARKER;
            }
        }

        for (r, cells) in grid.iter().enumerate() {
            let label = if r == 0 {
                format!("{:>w$.2}", hi, w = LABEL_WIDTH)
            } else if r == self.height - 1 {
                format!("{:>w$.2}", lo, w = LABEL_WIDTH)
            } else {
                " ".repeat(LABEL_WIDTH)
            };
            let line: String = cells.iter().collect();
            writeln!(out, "{label} |{}", line.trim_end()).map_err(io)?;
        }

        writeln!(out, "{} +{}", " ".repeat(LABEL_WIDTH), "-".repeat(self.width)).map_err(io)?;
        let last = stream.len() - 1;
        let span = self.width.saturating_sub(1);
        writeln!(out, "{} 0{last:>span$}", " ".repeat(LABEL_WIDTH)).map_err(io)?;
        writeln!(
            out,
            "{} value   {} anomaly ({} flagged of {})",
            SERIES,
            MARKER,
            anomalies.len(),
            stream.len()
        )
        .map_err(io)?;
        Ok(())
    }
}
