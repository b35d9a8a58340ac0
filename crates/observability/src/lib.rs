//! Tracing/logging setup shared by binaries and tests built on the inventory
//! crates. The library crates only emit events; installing a subscriber is
//! left to whoever owns the process.

/// Env-driven configuration (filter, output format).
pub mod config;

/// Subscriber installation.
pub mod subscriber;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(&ObservabilityConfig::from_env());
}
