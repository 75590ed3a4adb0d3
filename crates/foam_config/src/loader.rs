//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::FoamConfig;
use std::path::Path;

/// File name looked up inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "foamfix.toml";

/// Loads and validates `foamfix.toml` from `dir`.
pub fn load_config(dir: &Path) -> Result<FoamConfig, ConfigError> {
    let content = std::fs::read_to_string(dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<FoamConfig, ConfigError> {
    let config: FoamConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &FoamConfig) -> Result<(), ConfigError> {
    if config.report.enabled && config.report.event.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.event must not be empty".to_string(),
        ));
    }
    Ok(())
}
