use super::{types::Config, ConfigError};

/// Longest simulated live stats delay we accept.
const MAX_LATENCY_MS: u64 = 10_000;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog path is not empty
/// - Live stats latency is at most 10 seconds
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.path cannot be empty".to_string(),
        ));
    }

    if config.live.latency_ms > MAX_LATENCY_MS {
        return Err(ConfigError::ValidationError(format!(
            "live.latency_ms cannot exceed {}",
            MAX_LATENCY_MS
        )));
    }

    Ok(())
}
