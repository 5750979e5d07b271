//! Logging setup for Huddle.
//!
//! One subscriber per process, initialized at the CLI boundary. Library
//! crates only ever emit through the `tracing` macros.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system with the default `huddle=info` filter.
///
/// `RUST_LOG` overrides the default when set. Verbose/quiet flags from the
/// CLI map to explicit filters via [`init_with_filter`].
pub fn init_default() {
    init_with_filter("huddle=info");
}

/// Initialize logging with an explicit filter directive.
pub fn init_with_filter(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
