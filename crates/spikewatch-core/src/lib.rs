//! # spikewatch-core
//!
//! Shared foundation for the spikewatch workspace: the series data model,
//! per-subsystem error enums, layered TOML configuration, run events,
//! tracing setup, and default constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use types::{Anomaly, AnomalySet, AnomalySetBuilder, DataStream};
