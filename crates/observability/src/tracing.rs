//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Structured JSON output by default; set `LOG_FORMAT=pretty` for
/// human-readable logs during local development. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "pretty");
    let _ = if pretty {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
}
