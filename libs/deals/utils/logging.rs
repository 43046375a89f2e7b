//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize tracing at the default `info` level.
pub fn init_tracing() {
    init_tracing_with_level("info");
}

/// Initialize tracing at the given level. `RUST_LOG`, when set, wins.
pub fn init_tracing_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
