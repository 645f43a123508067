//! Shared constants for spikewatch.

/// spikewatch version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Default run ----

/// Default series length for a run.
pub const DEFAULT_LENGTH: usize = 500;

/// Default fraction of points that receive a spike.
pub const DEFAULT_ANOMALY_RATE: f64 = 0.05;

/// Default absolute z-score above which a point is flagged.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

// ---- Signal shape ----

/// Amplitude of the primary oscillation.
pub const PRIMARY_AMPLITUDE: f64 = 10.0;

/// Period, in time steps, of the primary oscillation.
pub const PRIMARY_PERIOD: f64 = 50.0;

/// Amplitude of the slow seasonal component.
pub const SEASONAL_AMPLITUDE: f64 = 5.0;

/// Period, in time steps, of the seasonal component.
pub const SEASONAL_PERIOD: f64 = 200.0;

/// Standard deviation of the Gaussian noise added to every point.
pub const NOISE_STD_DEV: f64 = 1.0;

// ---- Spikes ----

/// Mean of the additive spike magnitude.
pub const SPIKE_MEAN: f64 = 20.0;

/// Standard deviation of the additive spike magnitude.
pub const SPIKE_STD_DEV: f64 = 5.0;

// ---- Rendering ----

/// Default terminal chart width in columns.
pub const DEFAULT_ASCII_WIDTH: usize = 100;

/// Default terminal chart height in rows.
pub const DEFAULT_ASCII_HEIGHT: usize = 20;

/// Default SVG width in pixels.
pub const DEFAULT_SVG_WIDTH: u32 = 1000;

/// Default SVG height in pixels.
pub const DEFAULT_SVG_HEIGHT: u32 = 600;

/// Blank border, in pixels, around the SVG plot area.
pub const SVG_MARGIN: u32 = 60;

/// Smallest SVG width or height that leaves a plot area inside the margins.
pub const MIN_SVG_DIMENSION: u32 = 2 * SVG_MARGIN + 1;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "spikewatch.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "SPIKEWATCH_LOG";
