//! Tests for the run event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use spikewatch_core::events::dispatcher::EventDispatcher;
use spikewatch_core::events::handler::RunEventHandler;
use spikewatch_core::events::types::*;

/// A test handler that counts events.
struct CountingHandler {
    generated: AtomicUsize,
    detected: AtomicUsize,
    errors: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            generated: AtomicUsize::new(0),
            detected: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }
}

impl RunEventHandler for CountingHandler {
    fn on_stream_generated(&self, _event: &StreamGeneratedEvent) {
        self.generated.fetch_add(1, Ordering::Relaxed);
    }

    fn on_anomalies_detected(&self, _event: &AnomaliesDetectedEvent) {
        self.detected.fetch_add(1, Ordering::Relaxed);
    }

    fn on_run_error(&self, _event: &RunErrorEvent) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl RunEventHandler for PanickingHandler {
    fn on_stream_generated(&self, _event: &StreamGeneratedEvent) {
        panic!("handler blew up");
    }
}

/// Handler that overrides nothing.
struct SilentHandler;
impl RunEventHandler for SilentHandler {}

fn generated_event() -> StreamGeneratedEvent {
    StreamGeneratedEvent {
        length: 500,
        anomaly_rate: 0.05,
        spikes: 25,
        seed: Some(7),
    }
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_stream_generated(&generated_event());
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let first = Arc::new(CountingHandler::new());
    let second = Arc::new(CountingHandler::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());
    dispatcher.register(Arc::new(SilentHandler));

    dispatcher.emit_stream_generated(&generated_event());
    dispatcher.emit_anomalies_detected(&AnomaliesDetectedEvent {
        flagged: 3,
        mean: 1.0,
        std_dev: 9.0,
        threshold: 3.0,
    });
    dispatcher.emit_run_error(&RunErrorEvent {
        code: "VALIDATION_ERROR",
        message: "bad".into(),
    });

    for handler in [&first, &second] {
        assert_eq!(handler.generated.load(Ordering::Relaxed), 1);
        assert_eq!(handler.detected.load(Ordering::Relaxed), 1);
        assert_eq!(handler.errors.load(Ordering::Relaxed), 1);
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_stream_generated(&generated_event());

    assert_eq!(counter.generated.load(Ordering::Relaxed), 1);
}
