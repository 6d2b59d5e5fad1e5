//! Logging setup shared by every executable.
//!
//! The level is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug` prints one
//! line per directive).  Without it only warnings and errors are shown, so a
//! normal run is silent.  Everything goes to stderr: the host reads stdout as
//! the list of directives.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is absent or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the level filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_LEVEL`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
