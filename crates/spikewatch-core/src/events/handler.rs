//! RunEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a run.
///
/// Handlers only override the events they care about. `Send + Sync` so a
/// handler can be shared across runs on different threads.
pub trait RunEventHandler: Send + Sync {
    fn on_stream_generated(&self, _event: &StreamGeneratedEvent) {}
    fn on_anomalies_detected(&self, _event: &AnomaliesDetectedEvent) {}
    fn on_run_error(&self, _event: &RunErrorEvent) {}
}
