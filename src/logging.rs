//! Diagnostic logging
//!
//! Command output goes to stdout with `println!`; tracing events go to
//! stderr so they never mix with it.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter (e.g. `TMBUNDLE_LOG=debug`)
pub const LOG_ENV: &str = "TMBUNDLE_LOG";

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
