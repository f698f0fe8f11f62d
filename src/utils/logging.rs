//! # Logging Setup
//!
//! Structured logging initialisation driven by [`LoggingConfig`].
//!
//! `RUST_LOG` takes precedence over the configured level when set, so a
//! deployment can raise verbosity without touching its config file.

use crate::config::LoggingConfig;
use crate::error::{LinkError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber from `config`.
///
/// Fails with [`LinkError::ConfigError`] if a subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| LinkError::ConfigError(format!("Failed to install subscriber: {e}")))
}
