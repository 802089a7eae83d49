//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `-v` flags win over `RUST_LOG`; with neither, only warnings are shown.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("swapnext=info"),
        2 => EnvFilter::new("swapnext=debug"),
        _ => EnvFilter::new("swapnext=trace"),
    };

    // Keep any subscriber installed earlier in the process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
