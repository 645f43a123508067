//! spikewatch — generate a seasonal stream with injected spikes, flag
//! outliers by global z-score, and chart the result.
//!
//! No flags: parameters come from `spikewatch.toml`, `SPIKEWATCH_*`
//! environment variables, or the built-in defaults (500 points, 5% spikes,
//! threshold 3).

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use spikewatch_analysis::pipeline::{run, seeded_rng, RunOutcome};
use spikewatch_analysis::visualize::{AsciiChart, SvgChart, Visualizer};
use spikewatch_core::config::SpikeConfig;
use spikewatch_core::constants::VERSION;
use spikewatch_core::errors::{RenderError, RunError, SpikeErrorCode};
use spikewatch_core::events::{
    AnomaliesDetectedEvent, EventDispatcher, RunErrorEvent, RunEventHandler,
    StreamGeneratedEvent,
};
use spikewatch_core::tracing::init_tracing;

/// Mirrors run events into the log.
struct LogHandler;

impl RunEventHandler for LogHandler {
    fn on_stream_generated(&self, event: &StreamGeneratedEvent) {
        tracing::debug!(
            length = event.length,
            spikes = event.spikes,
            seed = ?event.seed,
            "stream generated"
        );
    }

    fn on_anomalies_detected(&self, event: &AnomaliesDetectedEvent) {
        tracing::debug!(
            flagged = event.flagged,
            mean = event.mean,
            std_dev = event.std_dev,
            "anomalies detected"
        );
    }

    fn on_run_error(&self, event: &RunErrorEvent) {
        tracing::error!(code = event.code, message = %event.message, "run failed");
    }
}

fn main() -> ExitCode {
    init_tracing();
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.coded_message());
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), RunError> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = SpikeConfig::load(&root)?;

    let (mut rng, seed) = seeded_rng(&config);
    config.generator.seed = Some(seed);

    let mut events = EventDispatcher::new();
    events.register(Arc::new(LogHandler));

    let outcome = run(&config, &mut rng, &events)?;
    let stream = &outcome.labeled.stream;
    let anomalies = &outcome.report.anomalies;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.render.effective_ascii() {
        AsciiChart::new(
            config.render.effective_ascii_width(),
            config.render.effective_ascii_height(),
        )
        .render(stream, anomalies, &mut out)?;
    }
    print_summary(&outcome, &mut out).map_err(|e| RenderError::io("stdout", e))?;

    if let Some(path) = config.render.svg_path.as_deref() {
        SvgChart::new(
            config.render.effective_svg_width(),
            config.render.effective_svg_height(),
        )
        .render_to_path(stream, anomalies, Path::new(path))?;
        tracing::info!(path, "svg chart written");
    }

    if let Some(path) = config.render.report_path.as_deref() {
        outcome.write_report(Path::new(path))?;
        tracing::info!(path, "report written");
    }

    Ok(())
}

fn print_summary(outcome: &RunOutcome, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "spikewatch {VERSION}")?;
    if let Some(seed) = outcome.seed {
        writeln!(out, "seed:       {seed}")?;
    }
    writeln!(
        out,
        "points:     {} ({} spikes injected)",
        outcome.labeled.stream.len(),
        outcome.labeled.ground_truth.len()
    )?;
    if let Some(stats) = outcome.report.stats {
        writeln!(out, "mean:       {:.4}", stats.mean)?;
        writeln!(out, "std dev:    {:.4}", stats.std_dev)?;
    }
    writeln!(
        out,
        "threshold:  |z| > {}   ({} flagged)",
        outcome.report.threshold,
        outcome.report.anomalies.len()
    )?;
    writeln!(
        out,
        "precision:  {:.3}   recall: {:.3}",
        outcome.score.precision, outcome.score.recall
    )?;
    for anomaly in &outcome.report.anomalies {
        writeln!(out, "  {anomaly}")?;
    }
    Ok(())
}
