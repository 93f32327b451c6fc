//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the final
//! summary line each binary prints. Verbosity follows `RUST_LOG` and defaults to `info`.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
