//! End-to-end run tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use spikewatch_analysis::pipeline::{run, seeded_rng};
use spikewatch_core::config::SpikeConfig;
use spikewatch_core::errors::{GenerationError, RunError};
use spikewatch_core::events::{
    AnomaliesDetectedEvent, EventDispatcher, RunErrorEvent, RunEventHandler,
    StreamGeneratedEvent,
};

#[derive(Default)]
struct Recorder {
    generated: Mutex<Vec<StreamGeneratedEvent>>,
    detected: AtomicUsize,
    errors: Mutex<Vec<&'static str>>,
}

impl RunEventHandler for Recorder {
    fn on_stream_generated(&self, event: &StreamGeneratedEvent) {
        self.generated.lock().unwrap().push(event.clone());
    }

    fn on_anomalies_detected(&self, _event: &AnomaliesDetectedEvent) {
        self.detected.fetch_add(1, Ordering::Relaxed);
    }

    fn on_run_error(&self, event: &RunErrorEvent) {
        self.errors.lock().unwrap().push(event.code);
    }
}

fn dispatcher_with(recorder: &Arc<Recorder>) -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());
    dispatcher
}

#[test]
fn test_default_run() {
    let recorder = Arc::new(Recorder::default());
    let config = SpikeConfig::default();
    let outcome = run(
        &config,
        &mut StdRng::seed_from_u64(2024),
        &dispatcher_with(&recorder),
    )
    .unwrap();

    assert_eq!(outcome.labeled.stream.len(), 500);
    assert_eq!(outcome.labeled.ground_truth.len(), 25);
    assert_eq!(outcome.report.threshold, 3.0);
    assert_eq!(
        outcome.score.true_positives + outcome.score.false_negatives,
        25
    );

    let generated = recorder.generated.lock().unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].spikes, 25);
    assert_eq!(recorder.detected.load(Ordering::Relaxed), 1);
    assert!(recorder.errors.lock().unwrap().is_empty());
}

#[test]
fn test_invalid_request_stops_before_detection() {
    let recorder = Arc::new(Recorder::default());
    let mut config = SpikeConfig::default();
    config.generator.anomaly_rate = Some(1.5);

    let err = run(
        &config,
        &mut StdRng::seed_from_u64(1),
        &dispatcher_with(&recorder),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        RunError::Generation(GenerationError::InvalidAnomalyRate { .. })
    ));
    assert_eq!(*recorder.errors.lock().unwrap(), vec!["VALIDATION_ERROR"]);
    assert!(recorder.generated.lock().unwrap().is_empty());
    assert_eq!(recorder.detected.load(Ordering::Relaxed), 0);
}

#[test]
fn test_configured_seed_replays_run() {
    let config = SpikeConfig::from_toml("[generator]\nseed = 77\nlength = 200\n").unwrap();
    let events = EventDispatcher::new();

    let (mut rng_a, seed_a) = seeded_rng(&config);
    let (mut rng_b, seed_b) = seeded_rng(&config);
    assert_eq!((seed_a, seed_b), (77, 77));

    let a = run(&config, &mut rng_a, &events).unwrap();
    let b = run(&config, &mut rng_b, &events).unwrap();
    assert_eq!(a.labeled, b.labeled);
    assert_eq!(a.report, b.report);
}

#[test]
fn test_write_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    let config = SpikeConfig::from_toml("[generator]\nseed = 5\n").unwrap();
    let outcome = run(
        &config,
        &mut StdRng::seed_from_u64(5),
        &EventDispatcher::new(),
    )
    .unwrap();

    outcome.write_report(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["seed"], 5);
    assert_eq!(json["length"], 500);
    assert_eq!(json["threshold"], 3.0);
    assert_eq!(json["outcome"], "scored");
    assert_eq!(json["injected"].as_array().unwrap().len(), 25);
    assert_eq!(
        json["anomalies"].as_array().unwrap().len(),
        outcome.report.anomalies.len()
    );
}
