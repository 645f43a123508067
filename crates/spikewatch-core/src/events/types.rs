//! Event payload types.

/// Payload for `on_stream_generated`.
#[derive(Debug, Clone)]
pub struct StreamGeneratedEvent {
    pub length: usize,
    pub anomaly_rate: f64,
    pub spikes: usize,
    pub seed: Option<u64>,
}

/// Payload for `on_anomalies_detected`.
#[derive(Debug, Clone)]
pub struct AnomaliesDetectedEvent {
    pub flagged: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
}

/// Payload for `on_run_error`.
#[derive(Debug, Clone)]
pub struct RunErrorEvent {
    pub code: &'static str,
    pub message: String,
}
