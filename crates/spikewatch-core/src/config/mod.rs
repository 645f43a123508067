//! Configuration system for spikewatch.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod detector_config;
pub mod generator_config;
pub mod render_config;
pub mod spike_config;

pub use detector_config::DetectorConfig;
pub use generator_config::GeneratorConfig;
pub use render_config::RenderConfig;
pub use spike_config::SpikeConfig;
