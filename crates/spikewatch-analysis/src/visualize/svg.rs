//! SVG line chart with anomaly markers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use spikewatch_core::constants::{
    DEFAULT_SVG_HEIGHT, DEFAULT_SVG_WIDTH, MIN_SVG_DIMENSION, SVG_MARGIN,
};
use spikewatch_core::errors::RenderError;
use spikewatch_core::{AnomalySet, DataStream};

use super::{finite_range, unit_position, Visualizer, CHART_TITLE};

const MARGIN: f64 = SVG_MARGIN as f64;
const LEGEND_WIDTH: f64 = 130.0;
const LINE_COLOR: &str = "#1f4fd1";
const MARKER_COLOR: &str = "#ff8c00";

/// Standalone SVG document: blue polyline for the series, orange circles
/// for anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgChart {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgChart {
    fn default() -> Self {
        Self {
            width: DEFAULT_SVG_WIDTH,
            height: DEFAULT_SVG_HEIGHT,
        }
    }
}

/// Maps (index, value) into pixel space inside the plot margins.
struct Frame {
    width: f64,
    height: f64,
    len: usize,
    lo: f64,
    hi: f64,
}

impl Frame {
    fn x(&self, index: usize) -> f64 {
        let span = self.width - 2.0 * MARGIN;
        if self.len <= 1 {
            MARGIN + span / 2.0
        } else {
            MARGIN + span * index as f64 / (self.len - 1) as f64
        }
    }

    fn y(&self, value: f64) -> f64 {
        let span = self.height - 2.0 * MARGIN;
        self.height - MARGIN - span * unit_position(value, self.lo, self.hi)
    }
}

impl SvgChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render straight to a file, replacing it if present.
    pub fn render_to_path(
        &self,
        stream: &DataStream,
        anomalies: &AnomalySet,
        path: &Path,
    ) -> Result<(), RenderError> {
        let target = path.display().to_string();
        let file = File::create(path).map_err(|e| RenderError::io(target.clone(), e))?;
        let mut writer = BufWriter::new(file);
        self.render(stream, anomalies, &mut writer)?;
        writer.flush().map_err(|e| RenderError::io(target, e))
    }
}

impl Visualizer for SvgChart {
    fn render(
        &self,
        stream: &DataStream,
        anomalies: &AnomalySet,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        if self.width < MIN_SVG_DIMENSION || self.height < MIN_SVG_DIMENSION {
            return Err(RenderError::InvalidDimensions {
                width: u64::from(self.width),
                height: u64::from(self.height),
            });
        }
        let io = |e| RenderError::io("svg chart", e);
        let (w, h) = (f64::from(self.width), f64::from(self.height));

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        )
        .map_err(io)?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#).map_err(io)?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="18">{}</text>"#,
            w / 2.0,
            MARGIN / 2.0,
            CHART_TITLE
        )
        .map_err(io)?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">Time</text>"#,
            w / 2.0,
            h - MARGIN / 4.0
        )
        .map_err(io)?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 {:.1} {:.1})">Value</text>"#,
            MARGIN / 3.0,
            h / 2.0,
            MARGIN / 3.0,
            h / 2.0
        )
        .map_err(io)?;
        writeln!(
            out,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="#999"/>"##,
            MARGIN,
            MARGIN,
            w - 2.0 * MARGIN,
            h - 2.0 * MARGIN
        )
        .map_err(io)?;

        write_legend(out, w).map_err(io)?;

        if let Some((lo, hi)) = finite_range(stream) {
            let frame = Frame {
                width: w,
                height: h,
                len: stream.len(),
                lo,
                hi,
            };

            let points: Vec<String> = stream
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &v)| format!("{:.2},{:.2}", frame.x(i), frame.y(v)))
                .collect();
            writeln!(
                out,
                r#"<polyline fill="none" stroke="{}" stroke-width="1.5" points="{}"/>"#,
                LINE_COLOR,
                points.join(" ")
            )
            .map_err(io)?;

            for anomaly in anomalies {
                if !anomaly.value.is_finite() || anomaly.index >= stream.len() {
                    continue;
                }
                writeln!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"><title>t={} value={:.3}</title></circle>"#,
                    frame.x(anomaly.index),
                    frame.y(anomaly.value),
                    MARKER_COLOR,
                    anomaly.index,
                    anomaly.value
                )
                .map_err(io)?;
            }

            writeln!(
                out,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11">{:.2}</text>"#,
                MARGIN - 4.0,
                MARGIN,
                hi
            )
            .map_err(io)?;
            writeln!(
                out,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11">{:.2}</text>"#,
                MARGIN - 4.0,
                h - MARGIN,
                lo
            )
            .map_err(io)?;
        }

        writeln!(out, "</svg>").map_err(io)?;
        Ok(())
    }
}

/// Two entries in the top-right corner of the plot area.
fn write_legend(out: &mut dyn Write, width: f64) -> std::io::Result<()> {
    let x = (width - MARGIN - LEGEND_WIDTH).max(MARGIN);
    let y = MARGIN + 16.0;
    writeln!(out, r#"<g class="legend" font-size="12">"#)?;
    writeln!(
        out,
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1.5"/>"#,
        x + 8.0,
        y,
        x + 28.0,
        y,
        LINE_COLOR
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}">Data Stream</text>"#,
        x + 34.0,
        y + 4.0
    )?;
    writeln!(
        out,
        r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"/>"#,
        x + 18.0,
        y + 18.0,
        MARKER_COLOR
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}">Anomalies</text>"#,
        x + 34.0,
        y + 22.0
    )?;
    writeln!(out, "</g>")
}

#[cfg(test)]
mod tests {
    use spikewatch_core::{Anomaly, AnomalySetBuilder};

    use super::*;

    fn render(stream: &DataStream, anomalies: &AnomalySet) -> String {
        let mut buf = Vec::new();
        SvgChart::new(400, 300).render(stream, anomalies, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_document_structure() {
        let stream = DataStream::from(vec![0.0, 1.0, 2.0, 30.0, 1.0]);
        let mut builder = AnomalySetBuilder::new();
        builder.push(Anomaly::new(3, 30.0));
        let svg = render(&stream, &builder.build());

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains(">Time</text>"));
        assert!(svg.contains(">Value</text>"));
        assert_eq!(svg.matches("<polyline").count(), 1);
        // One legend marker plus one anomaly marker.
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("t=3 value=30.000"));
    }

    #[test]
    fn test_marker_sits_on_series_point() {
        // 5 points across a 400px frame with 60px margins: x(3) = 60 + 280 * 3/4.
        let stream = DataStream::from(vec![0.0, 1.0, 2.0, 30.0, 1.0]);
        let mut builder = AnomalySetBuilder::new();
        builder.push(Anomaly::new(3, 30.0));
        let svg = render(&stream, &builder.build());

        assert!(svg.contains(r#"cx="270.00" cy="60.00""#));
        assert!(svg.contains("270.00,60.00"));
    }

    #[test]
    fn test_legend_names_both_series() {
        let svg = render(&DataStream::from(vec![1.0, 2.0]), &AnomalySet::empty());
        let legend = &svg[svg.find(r#"<g class="legend""#).unwrap()..];
        let legend = &legend[..legend.find("</g>").unwrap()];
        assert!(legend.contains(">Data Stream</text>"));
        assert!(legend.contains(">Anomalies</text>"));
        assert!(legend.contains(LINE_COLOR));
        assert!(legend.contains(MARKER_COLOR));
    }

    #[test]
    fn test_frame_smaller_than_margins_rejected() {
        let mut buf = Vec::new();
        let err = SvgChart::new(100, 300)
            .render(&DataStream::from(vec![1.0, 2.0]), &AnomalySet::empty(), &mut buf)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { width: 100, height: 300 }));
        assert!(buf.is_empty());

        let ok = SvgChart::new(MIN_SVG_DIMENSION, MIN_SVG_DIMENSION).render(
            &DataStream::from(vec![1.0, 2.0]),
            &AnomalySet::empty(),
            &mut buf,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_empty_stream_has_no_series() {
        let svg = render(&DataStream::default(), &AnomalySet::empty());
        assert!(!svg.contains("<polyline"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_render_to_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chart.svg");
        let stream: DataStream = (0..50).map(|i| i as f64).collect();

        SvgChart::default()
            .render_to_path(&stream, &AnomalySet::empty(), &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<polyline"));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("chart.svg");
        let err = SvgChart::default()
            .render_to_path(&DataStream::from(vec![1.0]), &AnomalySet::empty(), &path)
            .unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
