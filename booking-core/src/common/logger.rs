//! Logging Infrastructure
//!
//! `EnvFilter`-driven tracing setup for embedding processes and test runs.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!("logging initialized");
    Ok(())
}
