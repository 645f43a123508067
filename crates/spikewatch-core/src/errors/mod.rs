//! Error handling for spikewatch.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod generation_error;
pub mod render_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use error_code::SpikeErrorCode;
pub use generation_error::GenerationError;
pub use render_error::RenderError;
pub use run_error::RunError;
