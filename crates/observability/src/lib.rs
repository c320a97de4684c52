//! Shared tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Logs go to stderr so stdout stays reserved for the rendered board.
/// Filterable via `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once (later calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
