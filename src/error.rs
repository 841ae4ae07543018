//! Error definitions shared across the crate.

use thiserror::Error;

/// Errors surfaced by network resolution and provider operations.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The requested symbol does not map to any known network.
    #[error("{0} network is not supported")]
    UnsupportedNetwork(String),

    /// The operation has no provider or algorithm for this network.
    /// Permanent, not retryable.
    #[error("{operation} is not implemented for the {network} network")]
    NotImplemented {
        network: String,
        operation: &'static str,
    },

    /// One provider failed (transport, timeout or malformed payload).
    /// Transient; absorbed by fallback ordering and only surfaced when
    /// a network has a single provider option.
    #[error("provider {provider} unavailable: {reason}")]
    ProviderUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// Every fee source in the fallback chain failed.
    #[error("no fee source responded for the {0} network")]
    FeeUnavailable(String),

    /// Every UTXO source for the network failed.
    #[error("no UTXO source responded for the {0} network")]
    UtxoUnavailable(String),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

impl NetworkError {
    pub(crate) fn not_implemented(network: &str, operation: &'static str) -> Self {
        Self::NotImplemented {
            network: network.to_string(),
            operation,
        }
    }
}

/// Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NetworkError::UnsupportedNetwork("XYZ".to_string());
        assert_eq!(err.to_string(), "XYZ network is not supported");

        let err = NetworkError::not_implemented("test-zcash", "fee estimation");
        assert!(err.to_string().contains("test-zcash"));
        assert!(err.to_string().contains("fee estimation"));
    }
}
