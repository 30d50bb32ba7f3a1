//! Logging utilities
//!
//! Installs a `tracing` subscriber for hosts that embed the reuse layer
//! without configuring logging themselves.

use crate::utils::error::{ReuseError, Result};
use tracing_subscriber::EnvFilter;

/// Output format for the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable single-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Build the env filter, honouring `RUST_LOG` and falling back to `default_level`
fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            ReuseError::config(format!("Invalid log level '{}': {}", default_level, e))
        }),
    }
}

/// Initialize the global tracing subscriber
///
/// Returns `ReuseError::Config` if the level does not parse or a global
/// subscriber is already installed.
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let filter = build_filter(default_level)?;

    let result = match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_thread_ids(true)
            .try_init(),
    };

    result.map_err(|e| ReuseError::config(format!("Failed to install subscriber: {}", e)))
}
