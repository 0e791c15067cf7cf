//! Diagnostics for the `gateway` binary.
//!
//! Stdout carries exactly one JSON response per invocation, so every log line
//! goes to stderr. The router reports rejected requests at `debug`, missing
//! targets at `info` and alias or filesystem failures at `warn`; alias
//! resolution and store calls are traced at `debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "gateway=warn";

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=gateway=debug gateway read docs/guide.md 2>trace.log
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
