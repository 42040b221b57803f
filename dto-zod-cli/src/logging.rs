//! Tracing subscriber setup.

use crate::error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))
}

/// Install the global fmt subscriber, writing to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init(level: &str) -> Result<(), ConfigError> {
    let filter = env_filter(level)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    Ok(())
}
