//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ASCII_HEIGHT, DEFAULT_ASCII_WIDTH, DEFAULT_SVG_HEIGHT, DEFAULT_SVG_WIDTH,
};

/// Configuration for chart and report output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Print the terminal chart to stdout. Default: true.
    pub ascii: Option<bool>,
    /// Terminal chart width in columns. Default: 100.
    pub ascii_width: Option<usize>,
    /// Terminal chart height in rows. Default: 20.
    pub ascii_height: Option<usize>,
    /// Write an SVG chart to this path when set.
    pub svg_path: Option<String>,
    /// SVG width in pixels. Default: 1000.
    pub svg_width: Option<u32>,
    /// SVG height in pixels. Default: 600.
    pub svg_height: Option<u32>,
    /// Write a JSON run report to this path when set.
    pub report_path: Option<String>,
}

impl RenderConfig {
    pub fn effective_ascii(&self) -> bool {
        self.ascii.unwrap_or(true)
    }

    pub fn effective_ascii_width(&self) -> usize {
        self.ascii_width.unwrap_or(DEFAULT_ASCII_WIDTH)
    }

    pub fn effective_ascii_height(&self) -> usize {
        self.ascii_height.unwrap_or(DEFAULT_ASCII_HEIGHT)
    }

    pub fn effective_svg_width(&self) -> u32 {
        self.svg_width.unwrap_or(DEFAULT_SVG_WIDTH)
    }

    pub fn effective_svg_height(&self) -> u32 {
        self.svg_height.unwrap_or(DEFAULT_SVG_HEIGHT)
    }
}
