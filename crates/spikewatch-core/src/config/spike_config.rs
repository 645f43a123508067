//! Top-level spikewatch configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DetectorConfig, GeneratorConfig, RenderConfig};
use crate::constants::{MIN_SVG_DIMENSION, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SPIKEWATCH_*`)
/// 2. Project config (`spikewatch.toml` in the working directory)
/// 3. User config (`~/.spikewatch/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpikeConfig {
    pub generator: GeneratorConfig,
    pub detector: DetectorConfig,
    pub render: RenderConfig,
}

/// Environment variables read by [`SpikeConfig::load`].
pub const ENV_VARS: [&str; 6] = [
    "SPIKEWATCH_LENGTH",
    "SPIKEWATCH_ANOMALY_RATE",
    "SPIKEWATCH_SEED",
    "SPIKEWATCH_THRESHOLD",
    "SPIKEWATCH_SVG_PATH",
    "SPIKEWATCH_REPORT_PATH",
];

impl SpikeConfig {
    /// Load configuration for a run rooted at `root`, including the user
    /// config under `~/.spikewatch/`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_from(root, Self::user_config_path().as_deref())
    }

    /// Load configuration with an explicit user config path.
    ///
    /// A user config that cannot be read is skipped; one that cannot be
    /// parsed is an error. The project config must parse if it exists.
    pub fn load_from(root: &Path, user_config: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping unreadable user config");
                    }
                }
            }
        }

        // Layer 2: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        tracing::debug!(
            length = config.generator.effective_length(),
            anomaly_rate = config.generator.effective_anomaly_rate(),
            threshold = config.detector.effective_threshold(),
            seed = ?config.generator.seed,
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SpikeConfig) -> Result<(), ConfigError> {
        if config.generator.length == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "generator.length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(rate) = config.generator.anomaly_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::ValidationFailed {
                    field: "generator.anomaly_rate".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(threshold) = config.detector.threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detector.threshold".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        for (field, value) in [
            ("render.ascii_width", config.render.ascii_width),
            ("render.ascii_height", config.render.ascii_height),
        ] {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for (field, value) in [
            ("render.svg_width", config.render.svg_width),
            ("render.svg_height", config.render.svg_height),
        ] {
            if value.is_some_and(|v| v < MIN_SVG_DIMENSION) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be at least {MIN_SVG_DIMENSION} pixels"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.spikewatch/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".spikewatch").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SpikeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SpikeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut SpikeConfig, other: &SpikeConfig) {
        // Generator
        if other.generator.length.is_some() {
            base.generator.length = other.generator.length;
        }
        if other.generator.anomaly_rate.is_some() {
            base.generator.anomaly_rate = other.generator.anomaly_rate;
        }
        if other.generator.seed.is_some() {
            base.generator.seed = other.generator.seed;
        }

        // Detector
        if other.detector.threshold.is_some() {
            base.detector.threshold = other.detector.threshold;
        }

        // Render
        if other.render.ascii.is_some() {
            base.render.ascii = other.render.ascii;
        }
        if other.render.ascii_width.is_some() {
            base.render.ascii_width = other.render.ascii_width;
        }
        if other.render.ascii_height.is_some() {
            base.render.ascii_height = other.render.ascii_height;
        }
        if other.render.svg_path.is_some() {
            base.render.svg_path = other.render.svg_path.clone();
        }
        if other.render.svg_width.is_some() {
            base.render.svg_width = other.render.svg_width;
        }
        if other.render.svg_height.is_some() {
            base.render.svg_height = other.render.svg_height;
        }
        if other.render.report_path.is_some() {
            base.render.report_path = other.render.report_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Values that fail to parse are ignored with a warning.
    fn apply_env_overrides(config: &mut SpikeConfig) {
        if let Some(v) = env_parsed::<usize>("SPIKEWATCH_LENGTH") {
            config.generator.length = Some(v);
        }
        if let Some(v) = env_parsed::<f64>("SPIKEWATCH_ANOMALY_RATE") {
            config.generator.anomaly_rate = Some(v);
        }
        if let Some(v) = env_parsed::<u64>("SPIKEWATCH_SEED") {
            config.generator.seed = Some(v);
        }
        if let Some(v) = env_parsed::<f64>("SPIKEWATCH_THRESHOLD") {
            config.detector.threshold = Some(v);
        }
        if let Ok(val) = std::env::var("SPIKEWATCH_SVG_PATH") {
            config.render.svg_path = Some(val);
        }
        if let Ok(val) = std::env::var("SPIKEWATCH_REPORT_PATH") {
            config.render.report_path = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    match val.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %val, "ignoring unparseable environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
