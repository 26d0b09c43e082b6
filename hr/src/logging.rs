//! Development-time tracing for the record transforms.
//!
//! The transforms emit `debug` events with input/output counts and `trace`
//! events for each removed record. Nothing is printed unless a subscriber is
//! installed.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=hr=trace cargo test
/// ```
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {}", err))
}
