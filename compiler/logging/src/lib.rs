#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Simple logging utilities for the generator.
//!
//! Every helper takes the emitting module as a short prefix, which is
//! recorded as a structured `module` field on the `tracing` event.

use tracing_subscriber::EnvFilter;

/// Emits a trace event with module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module, "{}", msg);
}

/// Emits a debug event with module prefix.
pub fn debug(module: &str, msg: &str) {
    tracing::debug!(module, "{}", msg);
}

/// Emits an info event with module prefix.
pub fn info(module: &str, msg: &str) {
    tracing::info!(module, "{}", msg);
}

/// Emits a warning event with module prefix.
pub fn warn(module: &str, msg: &str) {
    tracing::warn!(module, "{}", msg);
}

/// Install a stderr fmt subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence over `level` when set. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
