//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// The filter comes from `KENO_LOG` (e.g. `KENO_LOG=keno_engine=debug`) and
/// defaults to `warn`. Calling this more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("KENO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
