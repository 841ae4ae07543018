//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::NetworkConfig;
use crate::error::{NetworkError, Result};

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<NetworkConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| NetworkError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let config: NetworkConfig = toml::from_str(&content)
        .map_err(|e| NetworkError::Config(format!("cannot parse {}: {}", path.display(), e)))?;

    validate_config(&config)?;

    Ok(config)
}

/// Reject configurations that cannot produce working provider calls.
pub fn validate_config(config: &NetworkConfig) -> Result<()> {
    for (name, value) in [
        ("providers.blockcypher_url", &config.providers.blockcypher_url),
        ("providers.cryptoid_url", &config.providers.cryptoid_url),
    ] {
        value
            .parse::<url::Url>()
            .map_err(|e| NetworkError::Config(format!("{} is not a valid URL: {}", name, e)))?;
    }

    if config.providers.request_timeout_secs == 0 {
        return Err(NetworkError::Config(
            "providers.request_timeout_secs must be at least 1".to_string(),
        ));
    }
    if config.providers.fee_sample_size == 0 {
        return Err(NetworkError::Config(
            "providers.fee_sample_size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
