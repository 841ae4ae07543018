//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! carry defaults so the crate works with no config file at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the network layer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// External provider endpoints and timeouts.
    pub providers: ProviderConfig,

    /// Seed-node filtering settings.
    pub nodes: NodeConfig,
}

/// Provider endpoint configuration.
///
/// Base URLs are overridable so tests can point adapters at local mocks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the bulk-UTXO provider (BlockCypher-shaped API).
    pub blockcypher_url: String,

    /// Base URL of the per-explorer provider (cryptoid-shaped API).
    pub cryptoid_url: String,

    /// Per-request timeout in seconds. A timeout counts as
    /// "provider unavailable" for fallback purposes.
    pub request_timeout_secs: u64,

    /// Sample size for the recent-transactions fee fallback.
    pub fee_sample_size: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            blockcypher_url: "https://api.blockcypher.com/v1".to_string(),
            cryptoid_url: "https://chainz.cryptoid.info".to_string(),
            request_timeout_secs: 10,
            fee_sample_size: 5,
        }
    }
}

/// Seed-node filtering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Failure count at which a blacklisted node is excluded.
    pub max_tries: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            max_tries: crate::network::nodes::DEFAULT_MAX_TRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(
            config.providers.blockcypher_url,
            "https://api.blockcypher.com/v1"
        );
        assert_eq!(config.providers.cryptoid_url, "https://chainz.cryptoid.info");
        assert_eq!(config.providers.request_timeout_secs, 10);
        assert_eq!(config.nodes.max_tries, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: NetworkConfig = toml::from_str(
            r#"
            [providers]
            request_timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.providers.request_timeout_secs, 3);
        assert_eq!(config.providers.cryptoid_url, "https://chainz.cryptoid.info");
        assert_eq!(config.nodes.max_tries, 4);
    }
}
