//! Diagnostic logging for the CLI.
//!
//! Engine events (settlement milestones, replayed actions) go to stderr
//! through a `tracing-subscriber` fmt layer, so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` (the configured
/// `log_filter`) is used. Calling this again after a subscriber is installed
/// is a no-op, which keeps repeated `run` calls in one process safe.
pub fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
