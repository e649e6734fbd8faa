//! Diagnostic logging.
//!
//! User-facing output goes to stdout through the console reporter; this
//! subscriber writes `tracing` events to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
