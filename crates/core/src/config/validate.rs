use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog sources are not blank
/// - Storage path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.primary.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.primary cannot be empty".to_string(),
        ));
    }

    if let Some(fallback) = &config.catalog.fallback {
        if fallback.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.fallback cannot be empty when set".to_string(),
            ));
        }
    }

    if config.storage.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
