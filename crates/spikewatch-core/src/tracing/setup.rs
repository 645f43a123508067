//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter used when `SPIKEWATCH_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "spikewatch=info";

/// Initialize the spikewatch tracing/logging system.
///
/// Reads the `SPIKEWATCH_LOG` environment variable for per-module levels.
/// Format: `SPIKEWATCH_LOG=spikewatch_analysis::detector=debug,spikewatch=info`
///
/// Falls back to [`DEFAULT_FILTER`]. Calling it more than once is a no-op.
/// If another global subscriber is already installed, that one stays and
/// the failure is reported on stderr.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Logs go to stderr so stdout stays free for the chart.
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        if let Err(e) = installed {
            eprintln!("spikewatch: logging not initialized: {e}");
        }
    });
}
